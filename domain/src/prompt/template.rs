//! Prompt templates for the fact-check pipeline

/// Templates for generating prompts at each stage
pub struct FactCheckPrompt;

impl FactCheckPrompt {
    /// System prompt for text extraction from images
    pub fn text_extraction_system() -> &'static str {
        r#"You are a precise OCR assistant.
Transcribe all readable text in the image exactly as written, preserving line breaks.
Do not describe the image, translate, summarize, or add commentary.
If the image contains no readable text, respond with an empty message."#
    }

    /// User prompt for text extraction from images
    pub fn text_extraction() -> &'static str {
        "Extract all text from the following image."
    }

    /// System prompt for claim extraction
    pub fn claim_extraction_system() -> &'static str {
        r#"You are an analyst who identifies factual claims in text.
A factual claim is a statement that can reasonably be verified or debunked.
Opinions, questions, instructions, and predictions are not claims.
Each claim you list must be self-contained: resolve pronouns and references so the
claim can be checked without reading the rest of the text.
List each distinct claim once, in the order it appears.
Respond only with JSON matching the requested schema."#
    }

    /// User prompt for claim extraction
    pub fn claim_extraction(text: &str) -> String {
        format!(
            r#"Analyze the following text and identify all distinct factual claims that can be reasonably verified or debunked. List each claim as a string.

Text:
{}

Respond with a JSON object of the form {{"claims": ["..."]}}. Use an empty array if there are no claims."#,
            text
        )
    }

    /// System prompt for single-claim assessment
    pub fn assessment_system() -> &'static str {
        r#"You are a careful fact-checker.
Assess claims using your own knowledge and state how certain you are.
Never invent sources, citations, or URLs. Describe the basis of your reasoning instead,
for example "General knowledge", "Scientific consensus", "Contradicted by widely available data",
or "No supporting evidence found".
Respond only with JSON matching the requested schema."#
    }

    /// User prompt for single-claim assessment
    pub fn assessment(claim: &str) -> String {
        format!(
            r#"Analyze the following claim and provide a fact-check assessment.

Claim: "{}"

Provide:
- "isTrue": true if likely true, false if likely false. Omit this field entirely if the claim is highly uncertain or nuanced.
- "confidenceScore": a number from 0.0 to 1.0 for your confidence in this assessment.
- "source": a brief description of your reasoning basis. Do not invent specific sources or URLs.
- "reason": a concise explanation for your assessment."#,
            claim
        )
    }

    /// System prompt for article summarization with fact-checks
    pub fn article_system() -> &'static str {
        r#"You are an expert fact-checker and summarizer of articles.
Summaries are neutral and concise. Key claims are self-contained factual statements made by the article.
For each fact-check, describe your reasoning basis rather than inventing citations or URLs.
Respond only with JSON matching the requested schema."#
    }

    /// User prompt for article summarization with fact-checks
    pub fn article(url: &str) -> String {
        format!(
            r#"Given the following article URL: {}

1. Summarize the article.
2. Extract its key claims into "keyClaims".
3. Fact-check each key claim into "factChecks". Every entry must include "claim", "isTrue", "confidenceScore" (0-1), "source", and "reason".

If the article cannot be accessed, return an empty summary and empty arrays."#,
            url
        )
    }
}

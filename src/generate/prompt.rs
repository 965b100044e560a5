/// Build the fixed ESL coaching prompt with the transcript embedded
/// verbatim between delimiter markers
pub fn build_coaching_prompt(transcript: &str) -> String {
    format!(
        "You are an expert ESL teaching coach. Your task is to analyze the following \
         transcript from an ESL class and provide a feedback report. The report should \
         be divided into two sections: \"Strengths\" and \"Improvements\".\n\
         \n\
         When analyzing the transcript, please consider the following aspects of \
         effective ESL teaching:\n\
         \n\
         **For Strengths, look for:**\n\
         * Clear Instructions\n\
         * High Student Talk Time (STT)\n\
         * Positive Reinforcement and Error Correction\n\
         * Engaging Activities\n\
         * Scaffolding and support\n\
         * Concept Checking Questions (CCQs)\n\
         \n\
         **For Improvements, look for:**\n\
         * Lack of Clarity in instructions\n\
         * Dominating Teacher Talk Time (TTT)\n\
         * Missed Opportunities for Correction\n\
         * Pacing issues (too fast or too slow)\n\
         * Lack of Student Engagement\n\
         \n\
         Here is the transcript of the ESL class:\n\
         ---\n\
         {}\n\
         ---\n\
         \n\
         Please generate the feedback report now in Markdown format.\n",
        transcript
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_transcript_between_delimiters() {
        let prompt = build_coaching_prompt("Hello class\nToday we learn colors");
        assert!(prompt.contains("---\nHello class\nToday we learn colors\n---"));
    }

    #[test]
    fn test_prompt_names_both_sections() {
        let prompt = build_coaching_prompt("transcript");
        assert!(prompt.contains("\"Strengths\""));
        assert!(prompt.contains("\"Improvements\""));
    }

    #[test]
    fn test_prompt_covers_pedagogical_criteria() {
        let prompt = build_coaching_prompt("transcript");
        assert!(prompt.contains("Clear Instructions"));
        assert!(prompt.contains("Student Talk Time"));
        assert!(prompt.contains("Error Correction"));
        assert!(prompt.contains("Engaging Activities"));
        assert!(prompt.contains("Scaffolding"));
        assert!(prompt.contains("Concept Checking Questions"));
        assert!(prompt.contains("Teacher Talk Time"));
    }

    #[test]
    fn test_prompt_requests_markdown() {
        let prompt = build_coaching_prompt("transcript");
        assert!(prompt.contains("Markdown format"));
    }
}

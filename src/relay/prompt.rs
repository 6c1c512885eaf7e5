// Composite prompt construction
// Author: kelexine (https://github.com/kelexine)

/// Fixed instruction placed ahead of every user prompt.
pub const SYSTEM_INSTRUCTION: &str = "
You are a helpful and concise AI assistant specialized in providing professional responses.
Directly address the user's query without unnecessary pleasantries or small talk.
Maintain a formal and informative tone.
";

/// Role label separating the instruction from the user's text.
pub const USER_LABEL: &str = "\n\nUser: ";

/// Trailing cue for the model's turn.
pub const ASSISTANT_CUE: &str = "\nAssistant:";

/// Build the single prompt string sent upstream.
///
/// `user_prompt` is inserted as-is; callers trim it beforehand.
pub fn compose(system_instruction: &str, user_prompt: &str) -> String {
    format!("{system_instruction}{USER_LABEL}{user_prompt}{ASSISTANT_CUE}")
}

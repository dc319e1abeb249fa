mod persona;

pub use persona::SystemPersona;

const RESPONSE_INSTRUCTIONS: &str = "Please respond as Saarthi, the JECRC chatbot, in a helpful and informative manner.\n\
If the user is asking in Hindi or Rajasthani, try to respond in that language when appropriate.";

/// Builds the full prompt sent to the completion API.
///
/// The message is interpolated as-is: `message` must already be trimmed and non-empty,
/// `language` and `user_id` are opaque and echoed verbatim.
pub fn compose(persona: &SystemPersona, message: &str, language: &str, user_id: &str) -> String {
    format!(
        "{persona}\n\n\
         User Language: {language}\n\
         User ID: {user_id}\n\
         User Message: {message}\n\n\
         {RESPONSE_INSTRUCTIONS}"
    )
}

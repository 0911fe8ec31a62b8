const OPEN_FENCE: &str = "```javascript";
const CLOSE_FENCE: &str = "```";

/// Extract JavaScript code from a model response.
///
/// Returns the trimmed body of the first ```` ```javascript ```` block. When
/// the opening or closing fence is missing, the whole response is used.
pub fn extract_code(response: &str) -> &str {
    if let Some(start) = response.find(OPEN_FENCE) {
        let code_start = start + OPEN_FENCE.len();
        if let Some(end) = response[code_start..].find(CLOSE_FENCE) {
            return response[code_start..code_start + end].trim();
        }
    }

    response.trim()
}

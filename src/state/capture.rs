// Captured browser output

/// Messages captured from the browsers since the last spec result.
///
/// The buffer is shared by every browser of the reporter, so output from
/// browsers running at the same time ends up interleaved in whichever spec
/// result arrives next.
#[derive(Debug, Clone, Default)]
pub struct OutputCapture {
    messages: Vec<String>,
}

impl OutputCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one message
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Take everything captured so far as one block of text, leaving the
    /// buffer empty for the next spec.
    pub fn drain(&mut self) -> String {
        let mut text = self.messages.concat();
        text.push('\n');
        self.messages.clear();
        text
    }
}

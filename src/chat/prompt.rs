//! Prompt construction.

/// The file a prompt refers to and the part of it the user selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refs {
    /// File name shown to the model (no directory).
    pub filename: String,
    /// Whole file content.
    pub content: String,
    /// Selected line range, `start:end`.
    pub range: String,
    /// Selected text.
    pub selected_text: String,
}

impl Refs {
    /// Refs selecting the whole of a template file.
    ///
    /// Chat-control delimiters in the content are padded (`<|` to `<| `,
    /// `|>` to ` |>`) so the model does not read them as role markers.
    pub fn from_template(filename: impl Into<String>, content: &str) -> Self {
        let escaped = content.replace("<|", "<| ").replace("|>", " |>");
        let line_count = escaped.split('\n').count();
        Self {
            filename: filename.into(),
            range: format!("0:{}", line_count),
            selected_text: escaped.clone(),
            content: escaped,
        }
    }
}

/// Render the chat prompt for a selection plus a user instruction.
pub fn build_prompt(refs: &Refs, user: &str) -> String {
    format!(
        "<|system|>\n\
         Reply English.\n<|end|>\n\
         <|user|>\n\
         Current file content({filename}):\n```\n{content}\n```\n\n\n\
         Selected Text({filename} {range}), please stay focus on the selected text:\n```\n{selected}\n```\n\n\n\
         {user}\n\n\n<|end|>\n<|assistant|>",
        filename = refs.filename,
        content = refs.content,
        range = refs.range,
        selected = refs.selected_text,
        user = user,
    )
}

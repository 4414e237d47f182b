use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;
use std::path::Path;

// Left side is the input marker, right side names the open phone book.
pub(crate) struct PhonebookPrompt {
    book: String,
}

impl PhonebookPrompt {
    pub(crate) fn new(database_path: &str) -> Self {
        let book = Path::new(database_path)
            .file_name()
            .map(|v| v.to_string_lossy().into_owned())
            .unwrap_or_else(|| database_path.to_string());
        Self { book: format!("[{}]", book) }
    }
}

impl Prompt for PhonebookPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        "> ".into()
    }

    fn render_prompt_right(&self) -> Cow<str> {
        Cow::Borrowed(&self.book)
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, search: PromptHistorySearch) -> Cow<str> {
        format!("(search: {}) ", search.term).into()
    }
}

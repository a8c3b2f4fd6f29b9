use std::fmt::Display;

use markdownable::{CustomMarkdown, MarshalMarkdown, ToMarkdown};

#[derive(CustomMarkdown)]
struct Code<T> {
    #[markdown(obfuscate)]
    pub inner: T,
}

impl<T: Display> MarshalMarkdown for Code<T> {
    fn marshal_markdown(&self) -> markdownable::Result<String> {
        Ok(format!("`{}`", self.inner))
    }
}

fn main() {
    let _ = Code { inner: 42 }.to_markdown();
}

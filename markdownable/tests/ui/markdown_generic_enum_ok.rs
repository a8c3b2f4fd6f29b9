use std::marker::PhantomData;

use markdownable::{Markdown, ToMarkdown};

struct Opaque;

#[derive(Markdown)]
enum Event<T, M> {
    Started,
    Progress { done: T, total: T },
    Finished(T, PhantomData<M>),
}

#[derive(Markdown)]
enum Never {}

fn main() {
    let event: Event<u32, Opaque> = Event::Progress { done: 1, total: 4 };
    let _ = event.to_markdown();
    let _ = Event::<u32, Opaque>::Finished(4, PhantomData).to_markdown();
    let _ = Event::<u32, Opaque>::Started.to_markdown();
}

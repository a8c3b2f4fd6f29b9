use markdownable::{Markdown, ToMarkdown};

#[derive(Markdown)]
struct Deploy {
    #[markdown(rename = "Service")]
    pub service: String,
    #[markdown(rename = "Token", obfuscate)]
    pub token: String,
    #[markdown(omit)]
    pub internal_id: u64,
}

fn main() {
    let deploy = Deploy {
        service: "billing".to_string(),
        token: "deploy-token-0042".to_string(),
        internal_id: 7,
    };
    let _ = deploy.to_markdown();
}

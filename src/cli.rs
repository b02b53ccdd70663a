// CLI layer: positional argument parsing and console reporting.
// The whole surface is three positional arguments, so arguments are read
// straight from the iterator instead of pulling in a parser.

use std::path::Path;

use crate::api::ApiClient;
use crate::error::UploadError;

/// Base URL used when the second argument is omitted.
pub const DEFAULT_URL: &str = "http://localhost:8080";

/// Parsed positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub file_path: String,
    pub webui_url: String,
    pub api_key: Option<String>,
}

/// Parse the arguments after the program name. Returns `None` when the
/// required file path is missing; the caller prints usage and exits 1
/// without attempting any upload. Arguments past the third are ignored.
pub fn parse_args<I>(mut argv: I) -> Option<Args>
where
    I: Iterator<Item = String>,
{
    let file_path = argv.next()?;
    let webui_url = argv.next().unwrap_or_else(|| DEFAULT_URL.to_string());
    let api_key = argv.next();
    Some(Args {
        file_path,
        webui_url,
        api_key,
    })
}

/// Usage text with three example invocations.
pub fn usage() -> String {
    [
        "Usage: webui-upload <file-path> [webui-url] [api-key]",
        "",
        "Examples:",
        "  webui-upload document.pdf",
        "  webui-upload document.pdf http://your-ip:8080",
        "  webui-upload document.pdf http://your-ip:8080 your-api-key",
    ]
    .join("\n")
}

/// Run one upload and print the outcome. Returns true only when the
/// server answered 200 with a parseable body.
pub fn run(args: &Args) -> bool {
    // Checked here as well so a missing file is reported without the
    // progress lines; `upload_document` re-checks before any network I/O.
    if !Path::new(&args.file_path).exists() {
        println!("❌ File not found: {}", args.file_path);
        return false;
    }

    let client = match ApiClient::new(&args.webui_url, args.api_key.clone()) {
        Ok(client) => client,
        Err(e) => {
            println!("❌ Error: {}", e);
            return false;
        }
    };

    println!("📤 Uploading: {}", args.file_path);
    println!("   To: {}", args.webui_url);

    match client.upload_document(Path::new(&args.file_path)) {
        Ok(resp) => {
            println!("✅ Upload successful!");
            println!("   Document ID: {}", resp.id.as_deref().unwrap_or("N/A"));
            println!("   Status: {}", resp.status.as_deref().unwrap_or("N/A"));
            true
        }
        Err(UploadError::FileNotFound { path }) => {
            println!("❌ File not found: {}", path);
            false
        }
        Err(UploadError::Connect { url }) => {
            println!("❌ Cannot connect to {}", url);
            println!("   Make sure the server is running");
            false
        }
        Err(UploadError::Http { status, body }) => {
            println!("❌ Upload failed: HTTP {}", status);
            println!("   Response: {}", body);
            false
        }
        Err(UploadError::Other(msg)) => {
            println!("❌ Error: {}", msg);
            false
        }
    }
}

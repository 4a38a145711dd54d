mod app;
mod status;

use clap::Parser;
use color_eyre::eyre::Result;
use serde_json::json;

use app::DemoApp;

#[derive(Debug, Parser)]
#[command(
    name = "floatui-demo",
    version,
    about = "Interactive demo of floatui floating-label fields"
)]
struct Cli {
    /// Title shown at the top of the form
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Print the submitted values as JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let title = cli.title.unwrap_or_else(|| "New account".to_string());
    let app = DemoApp::new(title)?;

    match app.run()? {
        Some(submission) => {
            if cli.json {
                let payload = json!({
                    "firstName": submission.first_name,
                    "lastName": submission.last_name,
                    "email": submission.email,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("First name: {}", submission.first_name);
                println!("Last name:  {}", submission.last_name);
                if !submission.email.is_empty() {
                    println!("Email:      {}", submission.email);
                }
            }
        }
        None => println!("Aborted without submitting."),
    }

    Ok(())
}

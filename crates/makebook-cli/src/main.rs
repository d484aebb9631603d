use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "makebook",
    about = "Convert a PDF into a booklet-printable PDF",
    version
)]
struct Cli {
    /// Input PDF file
    input: PathBuf,

    /// Output PDF file
    #[arg(short, long, default_value = "booklet.pdf")]
    output: PathBuf,

    /// Width of the center gutter in points
    #[arg(long, default_value = "36.0")]
    gutter: f32,

    /// Skip the center guide line
    #[arg(long)]
    no_guide: bool,

    /// Compute the booklet but do not write the output file
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = pdf_booklet::BookletOptions {
        gutter_pt: cli.gutter,
        guide_line: !cli.no_guide,
    };

    let document = pdf_booklet::load_pdf(&cli.input).await?;

    let stats = pdf_booklet::calculate_statistics(&document);
    println!("Booklet statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Output sheets: {}", stats.output_sheets);
    println!("  Blank pages added: {}", stats.blank_pages_added);

    let booklet = pdf_booklet::make_booklet(&document, &options).await?;

    if cli.dry_run {
        println!("Dry run: not writing {}", cli.output.display());
        return Ok(());
    }

    pdf_booklet::save_pdf(booklet, &cli.output).await?;
    println!("Booklet → {}", cli.output.display());

    Ok(())
}

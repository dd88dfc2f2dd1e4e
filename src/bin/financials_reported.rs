//! Fetch financial statements as reported and print the raw response.
//!
//! ```sh
//! FINNHUB_API_KEY=... financials-reported --symbol INTC --from 2022-01-01
//! ```

#[cfg(not(any(feature = "hyper", feature = "reqwest")))]
compile_error!("financials-reported needs an HTTP client: enable the `hyper` or `reqwest` feature");

use std::io::Write;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use finnhub::model::{Report, Statement};
use finnhub::request::common::Frequency;
use finnhub::rest::financials;
use finnhub::{Finnhub, RawResponse};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "financials-reported", version, about = "Print Finnhub financials as reported")]
struct Args {
    /// Ticker symbol
    #[arg(long, default_value = "INTC")]
    symbol: String,

    /// Earliest filing date (YYYY-MM-DD)
    #[arg(long, default_value = "2022-01-01")]
    from: NaiveDate,

    /// Latest filing date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// annual or quarterly
    #[arg(long)]
    freq: Option<Frequency>,

    /// API root
    #[arg(long, env = "FINNHUB_BASE_URL", default_value = finnhub::client::DEFAULT_BASE_URL)]
    base_url: String,

    /// Also decode the body and print one line per filing
    #[arg(long)]
    summary: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "fetch failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> finnhub::Result<()> {
    let client = Finnhub::from_env()?.with_base_url(args.base_url);

    let mut request = financials::financials_reported(&client, args.symbol).from(args.from);
    if let Some(to) = args.to {
        request = request.to(to);
    }
    if let Some(freq) = args.freq {
        request = request.freq(freq);
    }

    let response = request.with_metadata().get().await?;
    tracing::info!(status = response.status, bytes = response.body.len(), "fetched");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    response.write_to(&mut out)?;

    if args.summary {
        write_summary(&mut out, &response)?;
    }
    Ok(())
}

fn write_summary<W: Write>(mut out: W, response: &RawResponse) -> finnhub::Result<()> {
    let report: Report = response.body.parse()?;
    writeln!(out)?;
    writeln!(out, "{} (cik {}): {} filings", report.symbol, report.cik, report.data.len())?;
    for filing in &report.data {
        let period = if filing.is_annual() {
            "FY".to_string()
        } else {
            format!("Q{}", filing.quarter)
        };
        let counts: Vec<String> = Statement::ALL
            .into_iter()
            .map(|statement| format!("{}={}", statement.key(), filing.report.statement(statement).len()))
            .collect();
        writeln!(
            out,
            "{} {} {} {} filed {} {}",
            filing.access_number,
            filing.form,
            filing.year,
            period,
            filing.filed_date,
            counts.join(" "),
        )?;
    }
    out.flush()?;
    Ok(())
}

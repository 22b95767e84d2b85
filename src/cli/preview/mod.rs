//! Preview command - prints generator output without touching the cache

use clap::{Args, ValueEnum};

use crate::domain::agent_log::{self, AgentLogGenerator, DEFAULT_AGENT_LOG_SEED};
use crate::domain::invoice::{self, DEFAULT_INVOICE_SEED, InvoiceGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    Invoices,
    Logs,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Which generator to run
    #[arg(value_enum)]
    pub dataset: Dataset,

    /// Number of items (defaults to the endpoint default)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Seed override (defaults to the seed the API uses)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Print the generated items as pretty JSON on stdout
pub fn run(args: PreviewArgs) -> anyhow::Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

fn render(args: &PreviewArgs) -> anyhow::Result<String> {
    let output = match args.dataset {
        Dataset::Invoices => {
            let limit = args.limit.unwrap_or(invoice::DEFAULT_LIMIT);
            let generator =
                InvoiceGenerator::with_seed(args.seed.unwrap_or(DEFAULT_INVOICE_SEED));
            serde_json::to_string_pretty(&generator.generate(limit as usize))?
        }
        Dataset::Logs => {
            let limit = args.limit.unwrap_or(agent_log::DEFAULT_LIMIT);
            let generator =
                AgentLogGenerator::with_seed(args.seed.unwrap_or(DEFAULT_AGENT_LOG_SEED));
            serde_json::to_string_pretty(&generator.generate(limit as usize))?
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(dataset: Dataset, limit: Option<u32>, seed: Option<u64>) -> PreviewArgs {
        PreviewArgs {
            dataset,
            limit,
            seed,
        }
    }

    #[test]
    fn test_invoice_preview_defaults() {
        let output = render(&args(Dataset::Invoices, None, None)).unwrap();
        let invoices: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

        assert_eq!(invoices.len(), invoice::DEFAULT_LIMIT as usize);
    }

    #[test]
    fn test_invoice_preview_matches_api_seed() {
        let output = render(&args(Dataset::Invoices, Some(3), None)).unwrap();
        let expected =
            serde_json::to_string_pretty(&InvoiceGenerator::default().generate(3)).unwrap();

        assert_eq!(output, expected);
    }

    #[test]
    fn test_log_preview_is_clamped() {
        let output = render(&args(Dataset::Logs, Some(500), Some(1))).unwrap();
        let logs: Vec<String> = serde_json::from_str(&output).unwrap();

        assert_eq!(logs.len(), agent_log::MAX_LIMIT as usize);
    }
}

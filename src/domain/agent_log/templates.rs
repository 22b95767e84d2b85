//! Message template pools, one per log category

pub const INVOICE_TEMPLATES: &[&str] = &[
    "Parser finished invoice #{invoice_id}",
    "Processing invoice #{invoice_id} from {company}",
    "Invoice #{invoice_id} validation complete",
    "Invoice #{invoice_id} added to batch #{batch_id}",
    "Verified invoice #{invoice_id} signatures",
];

pub const RISK_TEMPLATES: &[&str] = &[
    "RiskScore updated → {risk_score}",
    "Risk assessment for invoice #{invoice_id} completed: {risk_score}",
    "Completed risk assessment for batch #{batch_id}",
    "Updated risk model with {count} new datapoints",
    "Risk threshold adjusted to {risk_score}",
];

pub const FUNDING_TEMPLATES: &[&str] = &[
    "Batch {batch_id} sent for funding",
    "Funded invoice #{invoice_id} for ${amount}",
    "Liquidity check complete: ${amount} available",
    "Funds lock-up updated to ${amount}",
    "Funding rate adjusted to {rate}%",
];

pub const SYSTEM_TEMPLATES: &[&str] = &[
    "Matching engine heartbeat {timestamp}",
    "Processed {count} transactions in {time}ms",
    "System health check: {status}",
    "Database sync completed in {time}ms",
    "API response time: {time}ms (p95)",
];

/// Replaces every `{name}` placeholder with its value.
/// Placeholders without a value are left untouched.
pub fn render(template: &str, values: &[(&str, String)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |message, (name, value)| {
            message.replace(&format!("{{{}}}", name), value)
        })
}

/// Formats an integer with `,` thousands separators
pub fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

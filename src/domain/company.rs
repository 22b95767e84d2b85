//! Synthetic company names drawn from a caller-supplied random source

use rand::Rng;
use rand::seq::SliceRandom;

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
    "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
    "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores",
    "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell",
    "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner", "Diaz", "Parker",
    "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris", "Morales", "Murphy",
];

const SUFFIXES: &[&str] = &["Inc", "and Sons", "LLC", "Group", "PLC", "Ltd"];

fn last_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    LAST_NAMES.choose(rng).copied().unwrap_or("Smith")
}

/// Draws a company name in one of three shapes:
/// `Last Suffix`, `Last-Last` or `Last, Last and Last`.
pub fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => {
            let name = last_name(rng);
            let suffix = SUFFIXES.choose(rng).copied().unwrap_or("Inc");
            format!("{} {}", name, suffix)
        }
        1 => format!("{}-{}", last_name(rng), last_name(rng)),
        _ => format!(
            "{}, {} and {}",
            last_name(rng),
            last_name(rng),
            last_name(rng)
        ),
    }
}

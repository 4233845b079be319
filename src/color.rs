/// Starting seed colors for the scheme form.
use rand::RngExt;

/// Mid-saturation bases that give readable schemes in every mode.
const SEED_PALETTE: &[&str] = &[
    "#3498DB", "#1ABC9C", "#2ECC71", "#9B59B6", "#E67E22", "#E74C3C", "#F1C40F",
    "#16A085", "#2980B9", "#8E44AD", "#D35400", "#C0392B", "#27AE60", "#34495E",
];

/// Pick a seed for the form; `r` in the UI re-rolls it.
pub fn random_seed() -> String {
    let mut rng = rand::rng();
    SEED_PALETTE[rng.random_range(0..SEED_PALETTE.len())].to_string()
}

use anyhow::{Context, Result};
use serde::Serialize;

/// One CSV row, columns named as in marketplace exports.
///
/// Numeric cells are strings so the sample can carry blanks and junk values
/// the analyzer must coerce to missing.
#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Brand")]
    brand: String,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "BSR")]
    bsr: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "ASIN")]
    asin: String,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

const ADJECTIVES: &[&str] = &["Funny", "Retro", "Vintage", "Cute", "Sarcastic", "Cool"];
const SUBJECTS: &[&str] = &["Cat", "Dog", "Dad", "Mom", "Nurse", "Gamer", "Fishing"];
const OCCASIONS: &[&str] = &["Birthday", "Christmas", "Halloween", "Retirement", "2024"];
const PRODUCTS: &[&str] = &["T-Shirt", "Hoodie", "Tank Top", "Sweatshirt", "Mug"];
const BRANDS: &[&str] = &["Acme Tees", "Bolt Apparel", "Cactus Prints", "Dune Designs"];

const ASIN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn asin(rng: &mut SimpleRng) -> String {
    let tail: String = (0..8)
        .map(|_| ASIN_ALPHABET[(rng.next_u64() % ASIN_ALPHABET.len() as u64) as usize] as char)
        .collect();
    format!("B0{tail}")
}

fn sample_row(rng: &mut SimpleRng) -> SampleRow {
    let title = format!(
        "{} {} {} Gift {}",
        rng.pick(ADJECTIVES),
        rng.pick(SUBJECTS),
        rng.pick(OCCASIONS),
        rng.pick(PRODUCTS)
    );

    // ~5% of listings have no brand; a few carry junk or blank numeric cells.
    let brand = if rng.chance(0.05) {
        String::new()
    } else {
        rng.pick(BRANDS).to_string()
    };

    let price = if rng.chance(0.03) {
        "n/a".to_string()
    } else {
        let p = rng.gauss(21.0, 5.0).clamp(12.99, 39.99);
        format!("{p:.2}")
    };

    // Sales ranks are roughly log-normal.
    let bsr = if rng.chance(0.03) {
        String::new()
    } else {
        let r = rng.gauss(12.0, 1.8).exp().clamp(1.0, 5_000_000.0);
        format!("{}", r as i64)
    };

    let date = if rng.chance(0.02) {
        "unknown".to_string()
    } else {
        let day = 1 + rng.next_u64() % 28;
        let month = 1 + rng.next_u64() % 12;
        format!("2024-{month:02}-{day:02}")
    };

    SampleRow {
        title,
        brand,
        price,
        bsr,
        date,
        asin: asin(rng),
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_listings.csv".to_string());
    let n_rows = 500;

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    for _ in 0..n_rows {
        writer
            .serialize(sample_row(&mut rng))
            .context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {n_rows} listings to {output_path}");
    Ok(())
}

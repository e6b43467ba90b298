use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Map, Value};

/// Write a synthetic UTF-16LE `ids.json` for trying out `ship-filter`.
#[derive(Parser)]
#[command(name = "generate_sample", about)]
struct Args {
    /// Destination file
    #[arg(long, short, default_value = "ids.json")]
    output: PathBuf,

    /// Number of type records to generate
    #[arg(long, short, default_value_t = 500)]
    count: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// (groupID, name stem) – roughly a third are ship groups.
const GROUPS: &[(i64, &str)] = &[
    (25, "Frigate"),
    (26, "Cruiser"),
    (27, "Battleship"),
    (29, "Capsule"),
    (30, "Titan"),
    (419, "Combat Battlecruiser"),
    (6, "Sun"),
    (18, "Mineral"),
    (450, "Arkonor"),
    (53, "Energy Weapon"),
    (83, "Projectile Ammo"),
    (300, "Cyberimplant"),
    (1, "Character"),
    (517, "Cosmic Signature"),
];

const NAMES: &[&str] = &[
    "Rifter", "Ägir", "Ragnarok", "Tritanium", "Omen", "Kestrel", "Veldspar", "Ishtar",
];

fn generate(count: usize, seed: u64) -> Map<String, Value> {
    let mut rng = SimpleRng::new(seed);
    let mut catalog = Map::with_capacity(count);

    for i in 0..count {
        let &(group_id, stem) = rng.pick(GROUPS);
        let name = rng.pick(NAMES);
        let record = json!({
            "groupID": group_id,
            "name": { "en": format!("{name} {stem}") },
            "mass": (rng.next_f64() * 1.0e9).round(),
            "volume": (rng.next_f64() * 5.0e5).round(),
            "published": rng.next_u64() % 4 != 0,
        });
        catalog.insert((1000 + i).to_string(), record);
    }
    catalog
}

fn encode_utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    bytes.extend_from_slice(&[0xFF, 0xFE]);
    bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    bytes
}

fn main() -> Result<()> {
    let args = Args::parse();

    let catalog = generate(args.count, args.seed);
    let text = serde_json::to_string(&catalog).context("encoding sample catalog")?;
    let bytes = encode_utf16le_with_bom(&text);

    std::fs::write(&args.output, &bytes)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Wrote {} type records ({} bytes) to {}",
        catalog.len(),
        bytes.len(),
        args.output.display()
    );
    Ok(())
}

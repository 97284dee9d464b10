//! Writes a deterministic sample battery-telemetry CSV so the server has
//! something to plot. Mirrors the shape of the NASA battery metadata file:
//! a constant `test_id` (the degenerate case the preparer handles by
//! synthesizing a sequential cycle index), slowly rising impedances, and a
//! fading capacity.

use anyhow::{Context, Result};

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
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let cycles = 168;
    let test_id = 5; // constant across all rows, like the real metadata file

    let output_dir = "nasa_battery_data";
    let output_path = format!("{output_dir}/metadata.csv");
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {output_dir}"))?;

    let mut writer =
        csv::Writer::from_path(&output_path).with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["test_id", "Re", "Rct", "Capacity"])?;

    for cycle in 0..cycles {
        let age = cycle as f64 / cycles as f64;

        // Electrolyte resistance creeps up as the cell dries out.
        let re = 0.055 + 0.025 * age + rng.gauss(0.0, 0.002);
        // Charge-transfer resistance grows faster and noisier.
        let rct = 0.16 + 0.12 * age * age + rng.gauss(0.0, 0.006);
        // Capacity fades from ~1.86 Ah toward the 1.3 Ah end-of-life mark.
        let capacity = 1.86 - 0.55 * age + rng.gauss(0.0, 0.008);

        writer.write_record([
            test_id.to_string(),
            format!("{re:.6}"),
            format!("{rct:.6}"),
            format!("{capacity:.6}"),
        ])?;
    }

    writer.flush()?;
    println!("Wrote {cycles} cycles to {output_path}");
    Ok(())
}

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

const MARKERS: [(&str, f64); 8] = [
    ("head", 0.006),
    ("chest", 0.004),
    ("l_shoulder", 0.009),
    ("r_shoulder", 0.008),
    ("l_elbow", 0.014),
    ("r_elbow", 0.013),
    ("l_wrist", 0.021),
    ("r_wrist", 0.019),
];

const FRAMES: usize = 300;

/// Fitting error for one marker at one frame: a slow drift around the
/// marker's base error, occasional occlusion spikes, and sensor noise.
fn frame_error(base: f64, frame: usize, rng: &mut StdRng) -> Result<f64> {
    let noise = Normal::new(0.0, 0.15 * base).context("building noise distribution")?;
    let drift = 0.3 * base * (frame as f64 / 40.0).sin();
    let spike = if rng.gen_bool(0.02) { 2.0 * base } else { 0.0 };
    Ok((base + drift + spike + noise.sample(rng)).max(0.0))
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let output_path = "fitting_log.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer
        .write_record(MARKERS.iter().map(|(name, _)| *name))
        .context("writing header")?;

    for frame in 0..FRAMES {
        let row = MARKERS
            .iter()
            .map(|&(_, base)| Ok(format!("{:.6}", frame_error(base, frame, &mut rng)?)))
            .collect::<Result<Vec<String>>>()?;
        writer
            .write_record(&row)
            .with_context(|| format!("writing frame {frame}"))?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {} markers ({FRAMES} frames each) to {output_path}", MARKERS.len());
    Ok(())
}

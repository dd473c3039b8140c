use anyhow::Result;

use scrollkit_core::EasingCurve;

const BAR_WIDTH: f64 = 40.0;

pub fn run(name: Option<&str>, samples: usize) -> Result<()> {
    let samples = samples.max(2);

    match name {
        Some(name) => print_curve(EasingCurve::from(name), samples),
        None => {
            for curve in EasingCurve::ALL {
                print_curve(curve, samples);
            }
        }
    }

    Ok(())
}

fn print_curve(curve: EasingCurve, samples: usize) {
    println!("{}", curve.name());
    for i in 0..samples {
        let t = i as f64 / (samples - 1) as f64;
        let v = curve.apply(t);
        let bar = "#".repeat((v * BAR_WIDTH).round() as usize);
        println!("  t={:>5.2}  {:.4}  {}", t, v, bar);
    }
    println!();
}

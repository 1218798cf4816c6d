//! Curvelab explorer: prints analysis reports for each curve family.
//!
//! Usage:
//! ```text
//! cargo run --example explore                 # every family
//! cargo run --example explore -- quadratic    # one family
//! RUST_LOG=curvelab=trace cargo run --example explore -- polynomial
//! ```

use curvelab::geometry::curve::{
    Cubic, CurveFamily, Ellipse, FamilyKind, Linear, Polynomial, Quadratic, TrigFunction,
    Trigonometric,
};
use curvelab::operations::AnalyzeCurve;
use curvelab::tessellation::PhaseSweep;
use curvelab::CurvelabError;

/// Slider defaults of each family.
fn default_curve(kind: FamilyKind) -> Result<CurveFamily, CurvelabError> {
    Ok(match kind {
        FamilyKind::Linear => Linear::new(1.0, 0.0).into(),
        FamilyKind::Quadratic => Quadratic::new(1.0, 0.0, -4.0).into(),
        FamilyKind::Cubic => Cubic::new(1.0, 0.0, -3.0, 0.0).into(),
        FamilyKind::Polynomial => Polynomial::new(vec![1.0, 0.0, -5.0, 0.0, 4.0])?.into(),
        FamilyKind::Ellipse => Ellipse::new(5.0, 3.0).into(),
        FamilyKind::Trigonometric => {
            Trigonometric::new("sin".parse::<TrigFunction>()?, 2.0, 1.0, 0.0).into()
        }
    })
}

fn report(kind: FamilyKind) -> Result<(), CurvelabError> {
    let curve = default_curve(kind)?;
    let report = AnalyzeCurve::new(&curve).with_range(-5.0, 5.0).execute();

    tracing::info!(family = %kind, equation = %curve, samples = report.samples.len(), "analyzed");
    for (name, value) in report.properties.iter() {
        tracing::info!("  {name}: {value}");
    }
    for marker in &report.markers {
        tracing::info!(
            "  [{}] {} at ({:.3}, {:.3})",
            marker.kind,
            marker.label,
            marker.position.x,
            marker.position.y
        );
    }
    for guide in &report.guides {
        tracing::info!("  guide {:?} at {:.3}: {}", guide.orientation, guide.position, guide.label);
    }

    if let CurveFamily::Trigonometric(wave) = &curve {
        let frames = PhaseSweep::new(wave).execute();
        tracing::info!(frames = frames.len(), "phase sweep ready");
    }
    Ok(())
}

fn main() -> Result<(), CurvelabError> {
    // Default: WARN for everything, INFO for curvelab.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curvelab=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curvelab=info".parse().unwrap_or_default())
        .add_directive("explore=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match std::env::args().nth(1) {
        Some(name) => report(name.parse()?)?,
        None => {
            for kind in FamilyKind::ALL {
                report(kind)?;
            }
        }
    }
    Ok(())
}

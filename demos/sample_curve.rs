extern crate curve_fit;

use curve_fit::{ControlPoint, CurveSampler, InterpolationMode};

fn main() {

    let points = vec![
        ControlPoint::with_motion(0.0, 0.0, 2.0, 2.0, 1.0, 1.0),
        ControlPoint::weighted(5.0, 5.0, 2.0),
        ControlPoint::at(10.0, 0.0),
        ControlPoint::at(12.0, -4.0)
    ];

    let mut sampler = CurveSampler::new(InterpolationMode::Bezier).with_sample_count(60);
    let sample = sampler.sample(&points);

    if let Some(motions) = &sample.derived_motion {
        for (i, motion) in motions.iter().enumerate() {
            eprintln!(
                "p{}: v=({:.2}, {:.2}) a=({:.2}, {:.2})",
                i, motion.velocity.x, motion.velocity.y, motion.acceleration.x, motion.acceleration.y
            );
        }
    }

    println!("x;y");
    for point in sample.points.iter() {
        println!("{:.2};{:.2}", point.x, point.y);
    }
}

// main.rs
//
// Minimal demo of the chaindrive API: builds a few classic sprocket
// arrangements, prints their belt geometry, and steps one of them through
// a handful of animation frames.

use chaindrive::float_types::{PI, Real};
use chaindrive::ChainDrive;

fn describe(name: &str, circles: &[[Real; 3]]) {
    let drive = match ChainDrive::new(circles) {
        Ok(drive) => drive,
        Err(e) => {
            println!("{name}: {e}");
            return;
        },
    };

    println!("{name}:");
    println!(
        "  belt length {:.3}, {} links of pitch {:.3}",
        drive.total_length(),
        drive.link_count(),
        drive.link_pitch()
    );
    for (i, sprocket) in drive.sprockets().iter().enumerate() {
        println!(
            "  sprocket {i}: center ({:.1}, {:.1}), radius {:.1}, {} teeth, {}",
            sprocket.center.x,
            sprocket.center.y,
            sprocket.radius,
            sprocket.teeth,
            if sprocket.clockwise {
                "clockwise"
            } else {
                "counter-clockwise"
            }
        );
    }
    let bb = drive.bounding_box();
    println!(
        "  bounds ({:.1}, {:.1}) .. ({:.1}, {:.1})",
        bb.min().x,
        bb.min().y,
        bb.max().x,
        bb.max().y
    );
}

fn main() {
    // The arrangement from the code-review challenge.
    let pentagon: &[[Real; 3]] = &[
        [0.0, 0.0, 16.0],
        [100.0, 0.0, 16.0],
        [100.0, 100.0, 12.0],
        [50.0, 50.0, 24.0],
        [0.0, 100.0, 12.0],
    ];
    // The simplest possible belt.
    let two_pulley: &[[Real; 3]] = &[[0.0, 0.0, 26.0], [120.0, 0.0, 26.0]];
    // Overlapping circles cannot both carry a belt.
    let overlapping: &[[Real; 3]] = &[[0.0, 0.0, 10.0], [5.0, 0.0, 10.0]];

    describe("pentagon", pentagon);
    describe("two-pulley", two_pulley);
    describe("overlapping", overlapping);

    // Animate the two-pulley belt: a frame every sixteenth of a second at
    // the classic speed of 16π belt units per second.
    let drive = ChainDrive::new(two_pulley).expect("two-pulley belt is valid");
    let speed = 16.0 * PI;
    println!("two-pulley animation:");
    for frame in 0..4 {
        let offset = speed * frame as Real / 16.0;
        let sample = drive.sample(offset);
        let first = sample.points[0];
        println!(
            "  t={:.4}s offset {:7.3}: first anchor ({:7.3}, {:7.3}), phases {:?}",
            frame as Real / 16.0,
            offset,
            first.x,
            first.y,
            sample
                .phases
                .iter()
                .map(|p| (p * 1000.0).round() / 1000.0)
                .collect::<Vec<_>>()
        );
    }
}

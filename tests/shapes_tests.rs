mod support;

use chaindrive::{
    ChainDrive,
    float_types::{EPSILON, Real},
    link_outline,
};

use crate::support::{CHALLENGE, TWO_PULLEY, approx_eq};

#[test]
fn sprocket_outline_stays_between_valley_and_crest() {
    let drive = ChainDrive::new(&TWO_PULLEY).unwrap();
    let sprocket = &drive.sprockets()[0];
    let depth = 2.0;
    let outline = sprocket.outline(depth, 4);

    let ring = outline.exterior();
    assert!(ring.0.len() > 2);
    assert_eq!(ring.0[0], ring.0[ring.0.len() - 1], "outline is closed");

    let mut saw_valley = false;
    let mut saw_crest = false;
    for coord in &ring.0 {
        let r = (coord.x * coord.x + coord.y * coord.y).sqrt();
        assert!(r >= sprocket.radius - depth - EPSILON);
        assert!(r <= sprocket.radius + depth + EPSILON);
        saw_valley |= approx_eq(r, sprocket.radius - depth, EPSILON);
        saw_crest |= approx_eq(r, sprocket.radius + depth, EPSILON);
    }
    assert!(saw_valley && saw_crest);
}

#[test]
fn sprocket_outline_has_one_crest_per_tooth() {
    let drive = ChainDrive::new(&CHALLENGE).unwrap();
    let sprocket = &drive.sprockets()[0];
    assert_eq!(sprocket.teeth, 8);

    // One valley arc and one crest arc per tooth, segments + 1 points
    // each, plus the closing point.
    let segments = 6;
    let outline = sprocket.outline(2.0, segments);
    assert_eq!(
        outline.exterior().0.len(),
        2 * sprocket.teeth * (segments + 1) + 1
    );
}

#[test]
fn hub_outline_is_a_disc_with_a_pin_hole() {
    let drive = ChainDrive::new(&TWO_PULLEY).unwrap();
    let sprocket = &drive.sprockets()[0];
    let hub = sprocket.hub_outline(4.5, 3.0, 24);

    for coord in &hub.exterior().0 {
        let r = (coord.x * coord.x + coord.y * coord.y).sqrt();
        assert!(approx_eq(r, sprocket.radius - 4.5, EPSILON));
    }
    assert_eq!(hub.interiors().len(), 1);
    for coord in &hub.interiors()[0].0 {
        let r = (coord.x * coord.x + coord.y * coord.y).sqrt();
        assert!(approx_eq(r, 3.0, EPSILON));
    }
}

#[test]
fn link_outline_spans_the_pitch() {
    let pitch: Real = 12.0;
    let narrow = 2.0;
    let wide = 6.0;
    let link = link_outline(pitch, narrow, wide, 16);

    let ring = link.exterior();
    assert_eq!(ring.0[0], ring.0[ring.0.len() - 1], "outline is closed");

    let min_x = ring.0.iter().map(|c| c.x).fold(Real::MAX, Real::min);
    let max_x = ring.0.iter().map(|c| c.x).fold(Real::MIN, Real::max);
    let max_y = ring.0.iter().map(|c| c.y).fold(Real::MIN, Real::max);

    // Wide round end on the left, narrow round end on the right.
    assert!(approx_eq(min_x, -pitch / 2.0 - wide / 2.0, EPSILON));
    assert!(approx_eq(max_x, pitch / 2.0 + narrow / 2.0, EPSILON));
    assert!(max_y <= wide / 2.0 + EPSILON);

    // Pin centers sit on the outline's two arc centers, one pitch apart.
    for coord in &ring.0 {
        let on_wide = approx_eq(
            ((coord.x + pitch / 2.0).powi(2) + coord.y.powi(2)).sqrt(),
            wide / 2.0,
            EPSILON,
        );
        let near_narrow =
            ((coord.x - pitch / 2.0).powi(2) + coord.y.powi(2)).sqrt() <= wide / 2.0 + EPSILON;
        assert!(on_wide || near_narrow);
    }
}

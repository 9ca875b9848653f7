//! Bounding box overlay on the reference image.

use glam::Vec2;

use crate::drawing::draw_rect;
use crate::image::Image;

use super::config::Config;
use super::region::ChangeRegion;

/// Draw the bounding box of every region onto a fresh RGB copy of the
/// reference image.
///
/// Each rectangle spans from the region's top-left pixel to one past its
/// bottom-right pixel, so the one-pixel outline hugs the region without
/// covering it. A grayscale reference is promoted to RGB first; otherwise
/// the boxes could not be green.
pub(super) fn annotate(reference: &Image, regions: &[ChangeRegion], config: &Config) -> Image {
    let mut annotated = reference.to_rgb8();
    for region in regions {
        draw_rect(
            &mut annotated,
            Vec2::new(region.x() as f32, region.y() as f32),
            Vec2::new(region.width() as f32, region.height() as f32),
            config.box_color,
            config.box_stroke,
        );
    }
    annotated
}

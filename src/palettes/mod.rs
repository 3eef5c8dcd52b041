//! Color tables of the named colormaps.

use lazy_static::lazy_static;

pub(crate) mod ty;
use ty::{PaletteData, RGBA};

fn table(rgb: &[[f64; 3]]) -> PaletteData {
    PaletteData {
        rgb: rgb.iter().map(|&[r, g, b]| RGBA { r, g, b, a: 255. })
            .collect(),
    }
}

lazy_static! {
    pub(crate) static ref GRAY: PaletteData =
        table(&[[0., 0., 0.], [255., 255., 255.]]);

    pub(crate) static ref REVERSED_GRAY: PaletteData =
        table(&[[255., 255., 255.], [0., 0., 0.]]);

    pub(crate) static ref TEMPERATURE: PaletteData =
        table(&[[0., 0., 255.],
                [0., 255., 255.],
                [0., 255., 0.],
                [255., 255., 0.],
                [255., 0., 0.]]);

    pub(crate) static ref RED: PaletteData =
        table(&[[0., 0., 0.], [255., 0., 0.]]);

    pub(crate) static ref GREEN: PaletteData =
        table(&[[0., 0., 0.], [0., 255., 0.]]);

    pub(crate) static ref BLUE: PaletteData =
        table(&[[0., 0., 0.], [0., 0., 255.]]);
}

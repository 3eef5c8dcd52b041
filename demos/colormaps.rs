use std::{io::{BufWriter, Write},
          fs::File,
          error::Error};
use log::info;
use rgb::RGB8;
use colormap_config::{Colormap, ColormapConfig, ColormapName,
                      ColormapUpdate, Normalization, RGBColor};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        let c = c.to_gray();
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    env_logger::init();
    let mut config = ColormapConfig::new();
    config.subscribe(|c| info!("{}", serde_json::to_string(c)
                                   .unwrap_or_default()));

    let mut fh = BufWriter::new(File::create("colormaps.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Colormaps</title>\n\
                  </head>\n\
                  <body>")?;

    writeln!(fh, "<h3>Lookup tables</h3>")?;
    for name in ColormapName::ALL {
        config.set_colormap(ColormapUpdate::new().name(name))?;
        let lut = Colormap::<RGB8>::new(&config.colormap()).lut();
        table_of_colors(&mut fh, &lut, 1, &name.label())?;
    }

    // A histogram of 1, 2, …, 1000 spread over ten bins.
    writeln!(fh, "<h3>Data 1 to 1000</h3>")?;
    let edges: Vec<f64> = (0 ..= 10).map(|i| 1. + 99.9 * i as f64).collect();
    let counts = vec![100.; 10];
    config.set_histogram(Some(counts.as_slice()), Some(edges.as_slice()))?;
    let values: Vec<f64> = (0 .. 50).map(|i| 1. + 20. * i as f64).collect();
    for normalization in [Normalization::Linear, Normalization::Log] {
        config.set_colormap(ColormapUpdate::new()
                            .name(ColormapName::Temperature)
                            .normalization(normalization))?;
        let cmap = Colormap::<RGB8>::new(&config.colormap());
        let colors: Vec<RGB8> = values.iter()
            .filter_map(|&v| cmap.rgb(v)).collect();
        table_of_colors(&mut fh, &colors, 8, normalization.as_str())?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}

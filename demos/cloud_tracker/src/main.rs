use argh::FromArgs;
use chrono::NaiveDate;
use std::io::BufRead;
use std::path::PathBuf;

use nimbus::{
    drift::{analyze, AnalysisConfig},
    image::Image,
    imgproc::parallel::ExecutionStrategy,
    io::{
        png::write_image_png_rgb8,
        source::{consecutive_days, DatedImageCache, ImageSource, DEFAULT_DATA_DIR},
    },
};

/// Title of the viewer window.
const WINDOW_TITLE: &str = "Cloud Analysis";

#[derive(FromArgs)]
/// Compare the satellite images of two days and show the apparent cloud motion
struct Args {
    /// directory holding one image per day named YYYY-MM-DD.jpg
    #[argh(option, default = "PathBuf::from(DEFAULT_DATA_DIR)")]
    data_dir: PathBuf,

    /// the first day, defaults to yesterday
    #[argh(option)]
    day1: Option<NaiveDate>,

    /// the second day, defaults to today
    #[argh(option)]
    day2: Option<NaiveDate>,

    /// path of the written panel
    #[argh(option, short = 'o', default = "PathBuf::from(\"cloud_analysis.png\")")]
    output: PathBuf,

    /// spacing in pixels between the drawn motion vectors
    #[argh(option, default = "20")]
    stride: usize,

    /// width of the panel
    #[argh(option, default = "1600")]
    width: usize,

    /// height of the panel
    #[argh(option, default = "900")]
    height: usize,

    /// process the image rows in parallel
    #[argh(switch)]
    parallel: bool,

    /// only write the panel, do not open the Rerun viewer
    #[argh(switch)]
    no_viewer: bool,
}

/// Shows the composed panel to the user.
trait Presenter {
    fn present(&self, panel: &Image<u8, 3>) -> Result<(), Box<dyn std::error::Error>>;
}

struct PngPresenter {
    path: PathBuf,
}

impl Presenter for PngPresenter {
    fn present(&self, panel: &Image<u8, 3>) -> Result<(), Box<dyn std::error::Error>> {
        write_image_png_rgb8(&self.path, panel)?;
        log::info!("panel written to {}", self.path.display());
        Ok(())
    }
}

struct RerunPresenter {
    rec: rerun::RecordingStream,
}

impl Presenter for RerunPresenter {
    fn present(&self, panel: &Image<u8, 3>) -> Result<(), Box<dyn std::error::Error>> {
        self.rec.log_static(
            "panel",
            &rerun::Image::from_elements(panel.as_slice(), panel.size().into(), rerun::ColorModel::RGB),
        )?;

        // keep the recording alive until the user is done looking at it
        log::info!("panel sent to the viewer, press Enter to exit");
        wait_for_dismiss(std::io::stdin().lock())?;
        Ok(())
    }
}

/// Block until a line is entered or the input is closed.
fn wait_for_dismiss(mut input: impl BufRead) -> std::io::Result<()> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

fn resolve_days(args: &Args) -> Result<(NaiveDate, NaiveDate), Box<dyn std::error::Error>> {
    let today = chrono::Local::now().date_naive();
    let (yesterday, today) =
        consecutive_days(today).ok_or("cannot compute the previous day")?;
    Ok((args.day1.unwrap_or(yesterday), args.day2.unwrap_or(today)))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let (day1, day2) = resolve_days(&args)?;
    log::info!("comparing {day1} and {day2}");

    // both images are required before anything is computed
    let cache = DatedImageCache::new(&args.data_dir);
    let (img1, img2) = cache
        .load_pair(day1, day2)
        .inspect_err(|e| log::error!("{e}"))?;

    let config = AnalysisConfig {
        panel_size: [args.width, args.height].into(),
        vector_stride: args.stride,
        strategy: if args.parallel {
            ExecutionStrategy::ParallelRows
        } else {
            ExecutionStrategy::Serial
        },
    };

    let panel = analyze(&img1, &img2, &config)?;

    let mut presenters: Vec<Box<dyn Presenter>> = vec![Box::new(PngPresenter {
        path: args.output.clone(),
    })];

    if !args.no_viewer {
        let rec = rerun::RecordingStreamBuilder::new(WINDOW_TITLE).spawn()?;
        presenters.push(Box::new(RerunPresenter { rec }));
    }

    for presenter in presenters.iter() {
        presenter.present(&panel)?;
    }

    Ok(())
}

//! Windowed time-series chart of X, Y and Z.
//!
//! See [`PlotObserver`], [`Plottable`] and [`show_result`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use zxyt_core::{Observer, SimulationResult, window_bounds};
use zxyt_engine::feedback;

/// Trace names used for engine events and finished results.
pub const FRAME_TRACES: [&str; 3] = ["X", "Y", "Z"];

/// Configuration for rendering a chart.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("zxyt").legend().window(100))?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    window: Option<usize>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, and a
    /// window covering a fifth of the points.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            window: None,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Sets the initial number of points shown at once.
    #[must_use]
    pub fn window(mut self, size: usize) -> Self {
        self.window = Some(size);
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from an engine event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip that trace for the event.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<3> for feedback::Event {
    fn x(&self) -> Option<f64> {
        #[allow(clippy::cast_precision_loss)]
        let step = self.step as f64;
        Some(step)
    }

    fn traces(&self) -> [Option<f64>; 3] {
        [Some(self.frame.x), Some(self.frame.y), Some(self.frame.z)]
    }
}

/// An observer that collects trace data during a run and displays it via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names, and either pass
/// `&mut PlotObserver` as the engine observer or call
/// [`record`][PlotObserver::record] manually.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<3>::new(FRAME_TRACES);
/// feedback::solve(&config, &mut noise, &mut obs)?;
/// obs.show(ShowConfig::new().title("zxyt").legend())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let len = self.data.iter().map(Vec::len).max().unwrap_or(0);
        let size = config.window.unwrap_or((len / 5).max(1));
        let (start, end) = window_bounds(len, 0, size);
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    len,
                    start,
                    size: end - start,
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to engines that take an observer
/// by value, so [`PlotObserver::show`] can be called after the run completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// Opens a chart of a finished result's X, Y and Z traces.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show_result(result: &SimulationResult, config: ShowConfig) -> Result<(), eframe::Error> {
    let mut obs = PlotObserver::<3>::new(FRAME_TRACES);
    for (step, frame) in result.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let step = step as f64;
        obs.record(step, [Some(frame.x), Some(frame.y), Some(frame.z)]);
    }
    obs.show(config)
}

/// The egui [`eframe::App`] that renders the visible window of each trace.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    len: usize,
    start: usize,
    size: usize,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("window_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let max_size = self.len.max(1);
                ui.add(egui::Slider::new(&mut self.size, 1..=max_size).text("Window size"));

                let max_start = self.len.saturating_sub(self.size);
                ui.add(egui::Slider::new(&mut self.start, 0..=max_start).text("Window start"));
            });
        });

        let (start, end) = window_bounds(self.len, self.start, self.size);
        self.start = start;

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("zxyt_chart");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let visible: PlotPoints = points
                        .iter()
                        .skip(start)
                        .take(end - start)
                        .copied()
                        .collect();
                    plot_ui.line(Line::new(visible).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zxyt_core::{Frame, Observer};

    fn feed(obs: &mut PlotObserver<3>, step: usize, frame: Frame) {
        let _: Option<feedback::Action> = obs.observe(&feedback::Event { step, frame });
    }

    #[test]
    fn records_every_frame_component() {
        let mut obs = PlotObserver::<3>::new(FRAME_TRACES);
        feed(&mut obs, 0, Frame::initial(0.6, 0.4));
        feed(&mut obs, 1, Frame::new(0.5, 0.5, -0.1));

        assert_eq!(obs.data[0], [[0.0, 0.6], [1.0, 0.5]]);
        assert_eq!(obs.data[1], [[0.0, 0.4], [1.0, 0.5]]);
        assert_eq!(obs.data[2], [[0.0, 0.0], [1.0, -0.1]]);
    }

    #[test]
    fn record_skips_missing_traces() {
        let mut obs: PlotObserver<2> = PlotObserver::new(["a", "b"]);
        obs.record(1.0, [Some(10.0), None]);
        obs.record(2.0, [None, Some(20.0)]);

        assert_eq!(obs.data[0], [[1.0, 10.0]]);
        assert_eq!(obs.data[1], [[2.0, 20.0]]);
    }

    #[test]
    fn never_returns_an_action() {
        let mut obs = PlotObserver::<3>::new(FRAME_TRACES);
        let action: Option<feedback::Action> = obs.observe(&feedback::Event {
            step: 0,
            frame: Frame::initial(0.0, 0.0),
        });
        assert!(action.is_none());
    }
}

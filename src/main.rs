// SPDX: CC0-1.0

use anyhow::Context;
use chrono::{DateTime, Local};
use core::num::NonZeroU32;
use function_grapher::{
    axis::TickStep,
    config::MAX_SIDE,
    record::RecordingCanvas,
    shell::{self, Command},
    stdlib::{self, Fun, Functions, DEFAULT_FUNCTION},
    surface::Color,
    CoordinateSystem, Number, PlotError, PlotSurface, ViewState, ZoomController,
};
use std::{
    cell::RefCell,
    fs::OpenOptions,
    io::{self, stdout, BufWriter, Write},
    process::ExitCode,
    rc::Rc,
};

fn output_svg_filename(now: DateTime<Local>) -> String {
    format!(
        "{}_output-{}.{}",
        env!("CARGO_PKG_NAME"),
        now.format("%Y-%m-%d_%H-%M-%S"),
        "svg"
    )
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("unexpected error: {err}");
            let chain = err.chain();
            if chain.len() > 1 {
                eprintln!();
                eprintln!("context:");
                for it in chain.skip(1) {
                    eprintln!("  {it}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Everything a redraw needs.
#[derive(Debug)]
struct Session {
    surface: PlotSurface,
    canvas: RecordingCanvas,
    fun_name: &'static str,
    fun: Fun,
    last: Option<CoordinateSystem>,
}

impl Session {
    fn render(&mut self, view: &ViewState) -> Result<(), PlotError> {
        let coords = self.surface.render_frame(&mut self.canvas, view, self.fun)?;
        self.last = Some(coords);
        Ok(())
    }
}

fn try_main() -> anyhow::Result<()> {
    let functions = stdlib::standard_functions();
    let surface = PlotSurface::default();
    let session = Rc::new(RefCell::new(Session {
        canvas: RecordingCanvas::new(surface.config().size),
        surface,
        fun_name: DEFAULT_FUNCTION,
        fun: stdlib::shifted,
        last: None,
    }));

    let mut zoom: ZoomController<'_, PlotError> = ZoomController::new();
    let _redraw = {
        let session = Rc::clone(&session);
        zoom.subscribe(move |view| session.borrow_mut().render(view))
    };
    zoom.redraw().context("failed to draw the initial frame")?;

    let mut stdout = BufWriter::new(stdout());
    loop {
        writeln!(stdout, "f(x) = {}", session.borrow().fun_name)?;

        let mut try_cmd = shell::input(&mut stdout, "> ")?;
        try_cmd.make_ascii_lowercase();
        writeln!(stdout)?;

        if let Ok(cmd) = try_cmd.parse::<Command>() {
            match cmd {
                Command::Help => {
                    for c in Command::exhaustive() {
                        writeln!(stdout, "{name}: {help}", name = c.name(), help = c.help())?;
                    }
                }

                Command::Quit => break,

                Command::SetFun => {
                    if set_fun(&mut stdout, &functions, &mut session.borrow_mut())? {
                        zoom.redraw()?;
                    }
                }

                Command::ListFun => {
                    for name in functions.keys() {
                        writeln!(stdout, "  {name}")?;
                    }
                }

                Command::ZoomIn => {
                    zoom.zoom_in()?;
                    status(&mut stdout, &zoom.view(), &session.borrow())?;
                }

                Command::ZoomOut => {
                    zoom.zoom_out()?;
                    status(&mut stdout, &zoom.view(), &session.borrow())?;
                }

                Command::Scroll => {
                    if let Ok(Some(delta)) =
                        shell::read_fromstr::<_, Number>(&mut stdout, "delta y = ", true)?
                    {
                        zoom.on_scroll(delta)?;
                        status(&mut stdout, &zoom.view(), &session.borrow())?;
                    }
                }

                Command::Reset => {
                    zoom.reset()?;
                    status(&mut stdout, &zoom.view(), &session.borrow())?;
                }

                Command::SetWin => {
                    set_win(&mut stdout, &mut session.borrow_mut())?;
                    zoom.redraw()?;
                }

                Command::Status => status(&mut stdout, &zoom.view(), &session.borrow())?,

                Command::Plot => plot(&mut stdout, &session.borrow())?,
            }
        } else {
            writeln!(stdout, r#"Unknown command, try "help" for help"#)?;
        }

        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Returns whether the function changed.
fn set_fun<W: Write>(
    mut out: W,
    functions: &Functions,
    session: &mut Session,
) -> anyhow::Result<bool> {
    let input = shell::input(&mut out, "f(x) = ")?;
    if input.is_empty() {
        return Ok(false);
    }

    if let Some((name, fun)) = functions.get_key_value(input.as_str()) {
        session.fun_name = *name;
        session.fun = *fun;
        return Ok(true);
    }

    shell::fun_undefined(&mut out, &input)?;
    if let Some(similar) = stdlib::most_similar(functions, &input) {
        writeln!(out, "note: function '{similar}' has a similar name")?;
    }
    writeln!(out, r#"note: try "list" to see every function"#)?;
    Ok(false)
}

fn set_win<W: Write>(mut out: W, session: &mut Session) -> anyhow::Result<()> {
    let config = session.surface.config_mut();
    writeln!(out, "window = {config:#}")?;
    writeln!(out)?;
    writeln!(out, "note: leave blank to skip")?;

    writeln!(out, "note: size must be an integer from 1 to {MAX_SIDE}")?;
    for (name, dst) in [
        ("width", &mut config.size.width),
        ("height", &mut config.size.height),
    ] {
        match shell::read_fromstr::<_, NonZeroU32>(
            &mut out,
            format_args!("?{name} (is {cur}) = ", cur = *dst),
            true,
        )? {
            Ok(Some(new)) if new.get() > MAX_SIDE => {
                writeln!(out, "{name} {new} is larger than {MAX_SIDE}")?;
                return Ok(());
            }
            Ok(Some(new)) => *dst = new.get(),
            Ok(None) => {}
            Err(_) => return Ok(()),
        }
    }

    for (name, dst) in [
        ("base scale", &mut config.base_scale),
        ("sample stride", &mut config.sample_stride),
        ("function width", &mut config.function.width),
    ] {
        match shell::read_fromstr::<_, Number>(
            &mut out,
            format_args!("?{name} (is {cur}) = ", cur = *dst),
            true,
        )? {
            Ok(Some(new)) => *dst = new,
            Ok(None) => {}
            Err(_) => return Ok(()),
        }
    }

    match shell::read_fromstr::<_, bool>(
        &mut out,
        format_args!("?negative x (is {cur}) = ", cur = config.include_negative_x),
        true,
    )? {
        Ok(Some(new)) => config.include_negative_x = new,
        Ok(None) => {}
        Err(_) => return Ok(()),
    }

    match shell::read_fromstr::<_, Color>(
        &mut out,
        format_args!("?function color (is {cur}) = ", cur = config.function.color),
        true,
    )? {
        Ok(Some(new)) => config.function.color = new,
        Ok(None) => {}
        Err(_) => return Ok(()),
    }

    Ok(())
}

fn status<W: Write>(mut out: W, view: &ViewState, session: &Session) -> io::Result<()> {
    let step = TickStep::for_zoom(view.zoom_ticks());
    writeln!(out, "zoom ticks: {}", view.zoom_ticks())?;
    if let Some(ref coords) = session.last {
        writeln!(out, "scale: {} px per unit", coords.scale())?;
        writeln!(out, "surface: {}", coords.size())?;
    }
    writeln!(out, "grid step: {}", step.value(1))?;
    Ok(())
}

fn plot<W: Write>(mut out: W, session: &Session) -> anyhow::Result<()> {
    let document = session
        .canvas
        .to_svg()
        .context("failed to render the frame as svg")?;

    let svg_path = output_svg_filename(Local::now());
    let mut svg = BufWriter::new(
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&svg_path)
            .context("failed to open output svg file")?,
    );

    svg.write_all(document.as_bytes())
        .context("failed to write to output svg file")?;
    svg.flush()?;
    svg.get_mut().sync_data()?;
    drop(svg);

    tracing::info!(path = %svg_path, function = session.fun_name, "wrote frame");
    writeln!(out, "wrote {svg_path}")?;
    Ok(())
}

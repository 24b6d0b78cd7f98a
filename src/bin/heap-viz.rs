extern crate clap;
extern crate heap_viz;

use std::io::BufRead;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use heap_viz::headless::render_rows;
use heap_viz::{
    Animator, ColorPair, Config, Easing, HeapNode, NodeId, Point, Scheduler, Size, Surface, Tween,
    Visualizer,
};

/// Prints what a graphical host would draw and remembers the next deadline.
struct TerminalHost {
    size: Size,
    deadline: Option<Instant>,
}

impl Surface for TerminalHost {
    fn size(&self) -> Size {
        self.size
    }

    fn add_node(&mut self, node: &HeapNode) {
        log::info!("add {} at ({:.0}, {:.0})", node.value(), node.current.x, node.current.y);
    }

    fn clear_nodes(&mut self) {
        log::info!("clear");
    }

    fn place_node(&mut self, _id: NodeId, _pos: Point) {}

    fn paint_node(&mut self, _id: NodeId, _colors: ColorPair) {}
}

impl Animator for TerminalHost {
    fn animate_to(&mut self, id: NodeId, from: Point, to: Point, tween: Tween) {
        log::info!(
            "move {:?} ({:.0}, {:.0}) -> ({:.0}, {:.0}) over {:?}",
            id,
            from.x,
            from.y,
            to.x,
            to.y,
            tween.duration
        );
    }
}

impl Scheduler for TerminalHost {
    fn schedule_after(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }
}

fn print_tree(vis: &Visualizer<TerminalHost>) {
    if vis.store().is_empty() {
        println!("(empty)");
    }
    for row in render_rows(vis.store()) {
        println!("{}", row);
    }
    println!();
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let matches = clap::App::new("heap-viz")
        .about("Step-by-step sift-up heap building. Reads commands from stdin: \
            <integer>, build, clear, resize <w> <h>, show, quit")
        .arg(clap::Arg::with_name("delay")
            .long("delay-ms")
            .takes_value(true)
            .default_value("1000")
            .help("Delay between steps in milliseconds"))
        .arg(clap::Arg::with_name("linear")
            .long("linear")
            .takes_value(false)
            .help("Use linear transitions instead of bouncing ones"))
        .get_matches();
    let delay = match matches.value_of("delay").unwrap_or("1000").parse::<u64>() {
        Ok(ms) => Duration::from_millis(ms),
        Err(e) => {
            eprintln!("Invalid --delay-ms: {}", e);
            std::process::exit(1);
        }
    };
    let easing = if matches.is_present("linear") { Easing::Linear } else { Easing::BounceOut };
    let config = Config::default()
        .with_step_delay(delay)
        .with_swap_duration(delay)
        .with_easing(easing);

    let host = TerminalHost {
        size: Size::new(800.0, 600.0),
        deadline: None,
    };
    let mut vis = Visualizer::new(host, config);

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    loop {
        let line = match vis.host().deadline {
            Some(deadline) => {
                let timeout = deadline.saturating_duration_since(Instant::now());
                match rx.recv_timeout(timeout) {
                    Ok(line) => line,
                    Err(RecvTimeoutError::Timeout) => {
                        vis.host_mut().deadline = None;
                        vis.step();
                        print_tree(&vis);
                        continue;
                    }
                    Err(RecvTimeoutError::Disconnected) => {
                        // Input closed; let the running pass finish.
                        while let Some(deadline) = vis.host_mut().deadline.take() {
                            thread::sleep(deadline.saturating_duration_since(Instant::now()));
                            vis.step();
                            print_tree(&vis);
                        }
                        break;
                    }
                }
            }
            None => match rx.recv() {
                Ok(line) => line,
                Err(_) => break,
            },
        };

        let mut words = line.split_whitespace();
        match words.next() {
            None => (),
            Some("quit") => break,
            Some("build") => {
                if vis.build() {
                    print_tree(&vis);
                }
            }
            Some("clear") => vis.clear(),
            Some("show") => print_tree(&vis),
            Some("resize") => {
                let w = words.next().and_then(|w| w.parse::<f32>().ok());
                let h = words.next().and_then(|h| h.parse::<f32>().ok());
                match (w, h) {
                    (Some(w), Some(h)) => {
                        vis.host_mut().size = Size::new(w, h);
                        vis.on_resize();
                    }
                    _ => eprintln!("usage: resize <width> <height>"),
                }
            }
            Some(_) => {
                vis.insert(&line);
                print_tree(&vis);
            }
        }
    }
}

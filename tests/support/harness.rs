use solid_tour::menu::ExampleMenu;
use solid_tour::output::{Output, OutputMode};
use solid_tour::render::{self, DisplayOptions};
use solid_tour::topic;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

/// Writer that appends into a buffer the test keeps a handle to.
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Drive the menu with `input` as stdin and return everything it printed.
pub fn run_menu(input: &str) -> String {
    run_menu_with(input, DisplayOptions::default())
}

pub fn run_menu_with(input: &str, options: DisplayOptions) -> String {
    run_menu_bytes(input.as_bytes(), options)
}

/// Like [`run_menu_with`], for input that need not be valid UTF-8.
pub fn run_menu_bytes(input: &[u8], options: DisplayOptions) -> String {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let output = Output::with_writer(OutputMode::Human, Box::new(SharedBuffer(buffer.clone())));

    ExampleMenu::new(Cursor::new(input.to_vec()), output, options)
        .run()
        .expect("menu run failed");

    let bytes = buffer.lock().unwrap().clone();
    String::from_utf8(bytes).expect("menu output is not UTF-8")
}

/// The text the menu prints for topic `id` with default options.
pub fn description(id: u8) -> String {
    let topic = topic::find(id).expect("unknown topic id");
    render::render_topic(topic, &DisplayOptions::default(), false).expect("render failed")
}

/// Ids of the numbered entries in each menu rendering, in print order.
pub fn menu_ids_per_iteration(output: &str) -> Vec<Vec<u8>> {
    output
        .split(solid_tour::menu::WELCOME)
        .skip(1)
        .map(|block| {
            block
                .lines()
                .take_while(|line| !line.starts_with(solid_tour::menu::PROMPT))
                .filter_map(|line| line.split_once(". "))
                .filter_map(|(id, _)| id.parse().ok())
                .collect()
        })
        .collect()
}

/// Path to the built binary.
#[allow(dead_code)]
pub fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_solid-tour"))
}

/// Run the binary with `args`, feeding `stdin` and capturing both streams.
#[allow(dead_code)]
pub fn run_binary(args: &[&str], stdin: &str) -> std::process::Output {
    run_binary_with_env(args, stdin, &[])
}

/// Like [`run_binary`], with extra environment variables set on the child.
#[allow(dead_code)]
pub fn run_binary_with_env(args: &[&str], stdin: &str, envs: &[(&str, &str)]) -> std::process::Output {
    let mut child = Command::new(binary())
        .args(args)
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn solid-tour");

    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for solid-tour")
}

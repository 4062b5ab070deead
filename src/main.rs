use std::{fs, process};

use anyhow::{Context, Result, bail};
use crossterm::{cursor, event, execute, terminal};

use turbo_studio::{
    api::{Editor, EditorCore},
    document::SceneDocument,
    editor::Studio,
    render::{
        RenderBridge,
        term::{TermSurface, TerminalProvider},
    },
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const GEN_USAGE: &str = "turbo-studio gen <scene.json>";
const STATE_USAGE: &str = "turbo-studio state <scene.json>";
const RENDER_USAGE: &str = "turbo-studio render <scene.json>";
const EDIT_USAGE: &str = "turbo-studio edit [scene.json]";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("gen") => {
            let path = args.next().context(GEN_USAGE)?;
            generate(&path)
        }
        Some("state") => {
            let path = args.next().context(STATE_USAGE)?;
            state(&path)
        }
        Some("render") => {
            let path = args.next().context(RENDER_USAGE)?;
            render(&path)
        }
        Some("edit") => edit(args.next().as_deref()),
        _ => bail!(
            "Turbo Studio — visual scene editor for the Turbo DSL\n\nUsage:\n  {GEN_USAGE}\n  {STATE_USAGE}\n  {RENDER_USAGE}\n  {EDIT_USAGE}"
        ),
    }
}

fn load_document(path: &str) -> Result<SceneDocument> {
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {path}"))
}

/// Print the generated DSL source for a scene file.
fn generate(path: &str) -> Result<()> {
    let editor = Editor::with_document(load_document(path)?);
    print!("{}", editor.generate_code());
    Ok(())
}

/// Print the host-facing document state projection as JSON.
fn state(path: &str) -> Result<()> {
    let editor = Editor::with_document(load_document(path)?);
    println!("{}", editor.document_state()?);
    Ok(())
}

/// Replay a scene file onto the terminal and wait for a key.
fn render(path: &str) -> Result<()> {
    let editor = Editor::with_document(load_document(path)?);

    let provider = TerminalProvider { rows_reserved: 0 };
    let mut bridge: RenderBridge<TermSurface> = RenderBridge::acquire(&provider, "terminal")?;

    let mut stdout = std::io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All),
    )?;

    let result = (|| -> Result<()> {
        bridge.replay(&editor.snapshot());
        bridge.surface().present(&mut stdout)?;
        event::read()?;
        Ok(())
    })();

    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn edit(path: Option<&str>) -> Result<()> {
    let mut studio = Studio::open(path)?;
    studio.run()
}

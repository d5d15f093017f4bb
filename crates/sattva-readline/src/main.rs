use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tokio::sync::mpsc;
use tokio::time::sleep;

use sattva_app::{App, ProfilePatch};
use sattva_assistant::build_assistant;
use sattva_core::breathing::{BreathPhase, CYCLE_SECONDS};
use sattva_core::chat::{ChatTranscript, SUGGESTIONS};
use sattva_core::content::{ARTICLES, RESOURCES};
use sattva_core::mood::Mood;
use sattva_core::user::Theme;
use sattva_core::view::View;
use sattva_infrastructure::JsonStore;
use sattva_infrastructure::config_storage::load_config;
use sattva_infrastructure::secret_storage::load_secrets;

type Repl = Editor<CliHelper, DefaultHistory>;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        let mut commands: Vec<String> = View::all()
            .into_iter()
            .map(|view| format!("/{view}"))
            .collect();
        commands.extend(
            ["/theme", "/logout", "/help", "/quit"]
                .iter()
                .map(|s| s.to_string()),
        );
        Self { commands }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// The rendering root: a single dark flag drives every color choice.
/// Re-applying the current theme is a no-op.
#[derive(Debug, Default, Clone, Copy)]
struct Palette {
    dark: bool,
}

impl Palette {
    fn apply(&mut self, theme: Theme) {
        self.dark = theme.is_dark();
    }

    fn title(&self, text: &str) -> colored::ColoredString {
        if self.dark {
            text.bright_white().bold()
        } else {
            text.blue().bold()
        }
    }

    fn dim(&self, text: &str) -> colored::ColoredString {
        text.bright_black()
    }

    fn accent(&self, text: &str) -> colored::ColoredString {
        if self.dark {
            text.bright_cyan()
        } else {
            text.cyan()
        }
    }

    fn assistant(&self, text: &str) -> colored::ColoredString {
        text.bright_blue()
    }

    fn good(&self, text: &str) -> colored::ColoredString {
        text.green()
    }

    fn alert(&self, text: &str) -> colored::ColoredString {
        text.red()
    }
}

/// Reads one line, mapping Ctrl-C/Ctrl-D to `None`.
fn read_line(rl: &mut Repl, prompt: &str) -> Option<String> {
    match rl.readline(prompt) {
        Ok(line) => {
            let trimmed = line.trim().to_string();
            if !trimmed.is_empty() {
                let _ = rl.add_history_entry(&line);
            }
            Some(trimmed)
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
        Err(err) => {
            eprintln!("{}", format!("Input error: {err}").red());
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // ===== Configuration and logging =====
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", format!("{err}").red());
            return Err(anyhow::anyhow!("configuration error"));
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // ===== Backend initialization =====
    let secrets = load_secrets().unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load secrets; assistant runs offline");
        Default::default()
    });
    let assistant = build_assistant(&config, &secrets);
    let store = JsonStore::open_default()?;
    let mut app = App::new(store, assistant)?;

    let mut palette = Palette::default();
    palette.apply(app.session.theme());

    // ===== REPL setup =====
    let helper = CliHelper::new();
    let mut rl: Repl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", palette.title("=== Sattva ==="));
    println!(
        "{}",
        palette.dim("A quiet place to check in with yourself. Type /help for commands.")
    );
    println!();

    if !app.session.is_authenticated() && !auth_flow(&mut rl, &mut app, &mut palette) {
        return Ok(());
    }

    show_view(&mut rl, &mut app, &mut palette).await;

    // ===== Main loop =====
    loop {
        let prompt = format!("sattva:{}> ", app.router.current());
        let Some(line) = read_line(&mut rl, &prompt) else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        match line.as_str() {
            "/quit" | "quit" | "exit" => break,
            "/help" => print_help(&palette),
            "/logout" => {
                if let Err(err) = app.auth.logout(&mut app.session) {
                    println!("{}", palette.alert(&err.to_string()));
                    continue;
                }
                app.router.go_home();
                palette.apply(app.session.theme());
                println!("{}", palette.dim("Signed out. Take care of yourself."));
                if !auth_flow(&mut rl, &mut app, &mut palette) {
                    break;
                }
                show_view(&mut rl, &mut app, &mut palette).await;
            }
            "/theme" => {
                let next = app.session.theme().toggled();
                match app.auth.update_profile(
                    &mut app.session,
                    ProfilePatch {
                        theme: Some(next),
                        ..Default::default()
                    },
                ) {
                    Ok(_) => {
                        palette.apply(app.session.theme());
                        println!("{}", palette.dim(&format!("Theme set to {next}.")));
                    }
                    Err(err) => println!("{}", palette.alert(&err.to_string())),
                }
            }
            command if command.starts_with('/') => match command[1..].parse::<View>() {
                Ok(view) => {
                    app.router.navigate(view);
                    show_view(&mut rl, &mut app, &mut palette).await;
                }
                Err(_) => println!(
                    "{}",
                    palette.dim("Unknown command. Type /help to see what's available.")
                ),
            },
            _ => println!(
                "{}",
                palette.dim("Commands start with '/'. Try /help, or /chat to talk.")
            ),
        }
    }

    println!("{}", palette.good("Goodbye! Be gentle with yourself."));
    Ok(())
}

fn print_help(palette: &Palette) {
    println!("{}", palette.title("Views"));
    for view in View::all() {
        println!("  {:<12} {}", format!("/{view}"), palette.dim(view.label()));
    }
    println!("{}", palette.title("Commands"));
    println!("  {:<12} {}", "/theme", palette.dim("Toggle light/dark theme"));
    println!("  {:<12} {}", "/logout", palette.dim("Sign out"));
    println!("  {:<12} {}", "/quit", palette.dim("Leave Sattva"));
}

/// Sign-in / registration loop. Returns false when the user quits.
fn auth_flow(rl: &mut Repl, app: &mut App, palette: &mut Palette) -> bool {
    println!(
        "{}",
        palette.accent("Sign in to continue: 'login', 'register', or 'quit'.")
    );

    loop {
        let Some(choice) = read_line(rl, "sattva:auth> ") else {
            return false;
        };

        match choice.as_str() {
            "quit" | "exit" | "/quit" => return false,
            "login" => {
                let Some(email) = read_line(rl, "email> ") else {
                    return false;
                };
                let Some(password) = read_line(rl, "password> ") else {
                    return false;
                };
                match app.auth.login(&mut app.session, &email, &password) {
                    Ok(user) => {
                        palette.apply(app.session.theme());
                        println!(
                            "{}",
                            palette.good(&format!("Welcome back, {}.", user.first_name()))
                        );
                        return true;
                    }
                    Err(err) => println!("{}", palette.alert(&err.to_string())),
                }
            }
            "register" => {
                let Some(name) = read_line(rl, "full name> ") else {
                    return false;
                };
                let Some(email) = read_line(rl, "email> ") else {
                    return false;
                };
                let Some(password) = read_line(rl, "password> ") else {
                    return false;
                };
                match app.auth.register(&mut app.session, &name, &email, &password) {
                    Ok(user) => {
                        palette.apply(app.session.theme());
                        println!(
                            "{}",
                            palette.good(&format!(
                                "Welcome, {}. This is your space now.",
                                user.first_name()
                            ))
                        );
                        return true;
                    }
                    Err(err) => println!("{}", palette.alert(&err.to_string())),
                }
            }
            "" => {}
            _ => println!("{}", palette.dim("Please type 'login', 'register', or 'quit'.")),
        }
    }
}

/// Renders the current view. The match is exhaustive on purpose: adding
/// a view without wiring its rendering is a compile error.
async fn show_view(rl: &mut Repl, app: &mut App, palette: &mut Palette) {
    match app.router.current() {
        View::Home => render_home(app, palette).await,
        View::LogMood => log_mood_form(rl, app, palette).await,
        View::History => render_history(app, palette),
        View::Chat => chat_view(rl, app, palette).await,
        View::Explore => render_explore(palette),
        View::Meditate => run_breathing(palette).await,
        View::Resources => render_resources(palette),
        View::Profile => profile_form(rl, app, palette),
    }
}

async fn render_home(app: &App, palette: &Palette) {
    match app.session.current() {
        Some(user) => println!(
            "{}",
            palette.title(&format!("Welcome, {}", user.first_name()))
        ),
        None => println!("{}", palette.title("Welcome")),
    }
    println!(
        "{}",
        palette.dim("Take a deep breath. You're in a safe space.")
    );
    println!();

    match app.dashboard.daily_quote().await {
        Ok(quote) => {
            println!("  {}", palette.accent(&format!("\"{}\"", quote.text)));
            println!("  {}", palette.dim(&format!("— {}", quote.author)));
        }
        Err(err) => tracing::warn!(%err, "failed to load daily quote"),
    }
    println!();

    let insight = app.dashboard.insight(app.journal.entries()).await;
    println!("  {} {}", palette.title("Insight:"), palette.assistant(&insight));
    println!();

    println!(
        "  {} {}   {} {}/5",
        palette.title("Total logs:"),
        app.journal.total(),
        palette.title("Avg stress:"),
        app.journal.average_stress()
    );
    println!();

    let window = app.journal.recent(7);
    if !window.is_empty() {
        println!("{}", palette.title("Your emotional trends"));
        for entry in window {
            let bar = "█".repeat(entry.mood.score() as usize);
            println!(
                "  {} {:<9} {} {}",
                palette.dim(&entry.recorded_at().format("%a").to_string()),
                entry.mood.label(),
                palette.accent(&bar),
                palette.dim(&format!("stress {}/5", entry.stress_level)),
            );
        }
    }
}

fn render_history(app: &App, palette: &Palette) {
    println!("{}", palette.title("Your journey history"));
    println!("{}", palette.dim("A timeline of your emotional well-being."));
    println!();

    let entries = app.journal.entries();
    if entries.is_empty() {
        println!("{}", palette.dim("No history yet."));
        return;
    }

    // Newest first.
    for entry in entries.iter().rev() {
        println!(
            "{} {}  {}",
            entry.mood.emoji(),
            palette.title(entry.mood.label()),
            palette.dim(
                &entry
                    .recorded_at()
                    .format("%B %-d, %Y")
                    .to_string()
            ),
        );
        let note = if entry.note.is_empty() {
            "No notes captured for this entry."
        } else {
            &entry.note
        };
        println!("   {}", note);
        println!("   {}", palette.dim(&format!("Stress: {}/5", entry.stress_level)));
        println!();
    }
}

async fn log_mood_form(rl: &mut Repl, app: &mut App, palette: &mut Palette) {
    println!("{}", palette.title("How is your mood right now?"));
    let moods = Mood::all();
    for (i, mood) in moods.iter().enumerate() {
        println!("  {}. {} {}", i + 1, mood.emoji(), mood.label());
    }

    let mood = loop {
        let Some(line) = read_line(rl, "mood (1-5)> ") else {
            app.router.go_home();
            return;
        };
        if let Ok(n) = line.parse::<usize>() {
            if (1..=moods.len()).contains(&n) {
                break moods[n - 1];
            }
        }
        if let Ok(mood) = line.parse::<Mood>() {
            break mood;
        }
        println!("{}", palette.dim("Pick a number 1-5 or a mood name."));
    };

    let stress = loop {
        let Some(line) = read_line(rl, "stress level, 1 calm - 5 overwhelmed> ") else {
            app.router.go_home();
            return;
        };
        match line.parse::<u8>() {
            Ok(level @ 1..=5) => break level,
            _ => println!("{}", palette.dim("Enter a number between 1 and 5.")),
        }
    };

    let Some(note) = read_line(rl, "journaling (optional)> ") else {
        app.router.go_home();
        return;
    };

    match app.log_mood(mood, stress, &note) {
        Ok(_) => {
            println!("{}", palette.good("Saved. Checking in is an act of courage."));
            println!();
            render_home(app, palette).await;
        }
        Err(err) => println!("{}", palette.alert(&err.to_string())),
    }
}

/// Chat with the assistant. The REPL stays interactive while a request
/// is outstanding; a second send while one is pending is dropped.
async fn chat_view(rl: &mut Repl, app: &mut App, palette: &mut Palette) {
    let transcript = Arc::new(Mutex::new(ChatTranscript::new()));
    let (reply_tx, mut reply_rx) = mpsc::channel::<String>(8);

    // Prints replies as they arrive so the prompt never blocks on the
    // assistant.
    let printer_transcript = Arc::clone(&transcript);
    let printer_palette = *palette;
    let printer = tokio::spawn(async move {
        while let Some(reply) = reply_rx.recv().await {
            {
                let mut t = printer_transcript.lock().expect("transcript lock");
                t.push_reply(reply.as_str());
            }
            for line in reply.lines() {
                println!("{}", printer_palette.assistant(line));
            }
        }
    });

    println!("{}", palette.title("AI Buddy"));
    {
        let t = transcript.lock().expect("transcript lock");
        println!("{}", palette.assistant(&t.messages()[0].text));
    }
    println!("{}", palette.dim("Quick starts:"));
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        println!("  {}. {}", i + 1, palette.dim(suggestion));
    }
    println!("{}", palette.dim("Type a number or your own words. '/back' leaves the chat."));

    loop {
        let Some(line) = read_line(rl, "chat> ") else {
            break;
        };
        if line == "/back" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        // A bare suggestion number expands to its prompt.
        let text = match line.parse::<usize>() {
            Ok(n) if (1..=SUGGESTIONS.len()).contains(&n) => SUGGESTIONS[n - 1].to_string(),
            _ => line,
        };

        let outbound = {
            let mut t = transcript.lock().expect("transcript lock");
            let was_pending = t.is_pending();
            match t.begin_send(&text) {
                Some(outbound) => Some(outbound),
                None => {
                    if was_pending {
                        println!(
                            "{}",
                            palette.dim("Still thinking about your last message. One at a time.")
                        );
                    }
                    None
                }
            }
        };

        if let Some(outbound) = outbound {
            let assistant = Arc::clone(&app.assistant);
            let tx = reply_tx.clone();
            tokio::spawn(async move {
                let reply = assistant
                    .chat_reply(&outbound.history, &outbound.message)
                    .await;
                let _ = tx.send(reply).await;
            });
            println!("{}", palette.dim("..."));
        }
    }

    // The transcript is ephemeral: leaving the view discards it, along
    // with any reply still in flight.
    printer.abort();
    app.router.go_home();
}

fn render_explore(palette: &Palette) {
    println!("{}", palette.title("Explore"));
    println!();
    for article in ARTICLES.iter() {
        println!(
            "{}  {}",
            palette.title(article.title),
            palette.dim(&format!("[{}]", article.category))
        );
        println!("   {}", article.summary);
        println!();
    }
}

fn render_resources(palette: &Palette) {
    println!("{}", palette.title("Support resources"));
    println!(
        "{}",
        palette.dim("Trusted organizations and crisis lines available to help.")
    );
    println!();
    for resource in RESOURCES.iter() {
        let name = if resource.urgent {
            palette.alert(resource.name).bold()
        } else {
            palette.title(resource.name)
        };
        println!("{}  {}", name, palette.dim(&format!("[{}]", resource.category)));
        println!("   {}", resource.description);
        if let Some(phone) = resource.phone {
            println!("   {}", palette.accent(&format!("Phone: {phone}")));
        }
        println!("   {}", palette.dim(resource.website));
        println!();
    }
}

async fn run_breathing(palette: &Palette) {
    println!("{}", palette.title("Box Breathing"));
    println!("{}", palette.dim("Calm your nervous system in seconds. Two cycles."));
    println!();

    let mut last: Option<BreathPhase> = None;
    for second in 0..(2 * CYCLE_SECONDS) {
        let phase = BreathPhase::at(second);
        if last != Some(phase) {
            println!("{}", palette.accent(phase.instruction()));
            last = Some(phase);
        }
        sleep(Duration::from_secs(1)).await;
    }

    println!();
    println!("{}", palette.good("Well done. Notice how you feel."));
}

fn profile_form(rl: &mut Repl, app: &mut App, palette: &mut Palette) {
    let Some(user) = app.session.current() else {
        println!("{}", palette.dim("Nobody is signed in."));
        return;
    };

    println!("{}", palette.title("My profile"));
    println!("  Name:  {}", user.name);
    println!("  Email: {}", user.email);
    println!("  Theme: {}", user.theme());
    println!();
    println!("{}", palette.dim("Leave a field blank to keep it."));

    let Some(name) = read_line(rl, "name> ") else {
        return;
    };
    let Some(email) = read_line(rl, "email> ") else {
        return;
    };
    let Some(password) = read_line(rl, "new password> ") else {
        return;
    };
    let Some(theme_input) = read_line(rl, "theme (light/dark)> ") else {
        return;
    };

    let theme = match theme_input.as_str() {
        "" => None,
        value => match value.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(_) => {
                println!("{}", palette.alert("Theme must be 'light' or 'dark'."));
                return;
            }
        },
    };

    let patch = ProfilePatch {
        name: (!name.is_empty()).then_some(name),
        email: (!email.is_empty()).then_some(email),
        password: (!password.is_empty()).then_some(password),
        theme,
    };

    match app.auth.update_profile(&mut app.session, patch) {
        Ok(_) => {
            palette.apply(app.session.theme());
            println!("{}", palette.good("Profile updated."));
        }
        Err(err) => println!("{}", palette.alert(&err.to_string())),
    }
}

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// A static line under `multi` whose message is rewritten on every tick.
pub fn countdown_line(multi: &MultiProgress, prefix: String) -> ProgressBar {
    let line = multi.add(ProgressBar::new_spinner());
    let style = ProgressStyle::default_spinner()
        .template("{prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    line.set_style(style);
    line.set_prefix(prefix);
    line
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/"])
        .template("{msg} {spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

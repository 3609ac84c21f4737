mod ui;

use gettextrs::{LocaleCategory, bind_textdomain_codeset, bindtextdomain, setlocale, textdomain};

const GETTEXT_PACKAGE: &str = "memory-match";

/// Where installed `.mo` catalogs live; packagers override it at build time.
const LOCALEDIR: &str = match option_env!("MEMORY_MATCH_LOCALEDIR") {
    Some(dir) => dir,
    None => "/usr/share/locale",
};

fn init_translations() -> std::io::Result<()> {
    bindtextdomain(GETTEXT_PACKAGE, LOCALEDIR)?;
    bind_textdomain_codeset(GETTEXT_PACKAGE, "UTF-8")?;
    textdomain(GETTEXT_PACKAGE)?;
    Ok(())
}

fn main() -> glib::ExitCode {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    if let Err(err) = init_translations() {
        log::warn!("translations unavailable: {err}");
    }

    ui::app::run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gettextrs::gettext;
    use gettextrs::getters::current_textdomain;

    #[test]
    fn text_domain_is_bound_to_locale_dir() {
        init_translations().unwrap();
        let bound = bindtextdomain(GETTEXT_PACKAGE, LOCALEDIR).unwrap();
        assert_eq!(bound, std::path::PathBuf::from(LOCALEDIR));
        assert_eq!(current_textdomain().unwrap(), GETTEXT_PACKAGE.as_bytes());
        // No catalog ships for the C locale, so strings fall through untranslated.
        assert_eq!(gettext("Memory Match"), "Memory Match");
    }
}

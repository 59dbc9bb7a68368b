//! Spelling Bee entry point
//!
//! Wires the DOM to the study session and word list in the browser.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

    use spelling_bee::dictionary::{Definition, LookupError, LookupTracker, fetch_definition};
    use spelling_bee::list::{SortConfig, SortKey, format_correct_rate, sorted};
    use spelling_bee::persistence::LocalStorage;
    use spelling_bee::settings::SpeechSettings;
    use spelling_bee::speech::Speaker;
    use spelling_bee::{Feedback, StudySession, SubmitOutcome, WordStore};

    /// App instance holding all state
    struct App {
        store: WordStore<LocalStorage>,
        session: StudySession,
        speaker: Speaker,
        /// Preference writes go through their own handle
        prefs: LocalStorage,
        rng: Pcg32,
        lookups: LookupTracker,
        sort: SortConfig,
    }

    impl App {
        fn new(seed: u64) -> Self {
            let prefs = LocalStorage::new();
            let settings = SpeechSettings::load(&prefs);
            Self {
                store: WordStore::open(LocalStorage::new()),
                session: StudySession::new(),
                speaker: Speaker::new(settings),
                prefs,
                rng: Pcg32::seed_from_u64(seed),
                lookups: LookupTracker::new(),
                sort: SortConfig::default(),
            }
        }
    }

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn element(id: &str) -> Option<Element> {
        document().get_element_by_id(id)
    }

    fn input(id: &str) -> Option<HtmlInputElement> {
        element(id).and_then(|el| el.dyn_into().ok())
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(id: &str, class: &str) {
        if let Some(el) = element(id) {
            let _ = el.set_attribute("class", class);
        }
    }

    /// Attach an event handler to the element with `id`
    fn listen<F>(id: &str, event: &str, handler: F)
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let Some(el) = element(id) else {
            log::warn!("Missing element #{}", id);
            return;
        };
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Run `f` after `ms` milliseconds
    fn after(ms: i32, f: impl FnOnce() + 'static) {
        let cb = Closure::once_into_js(f);
        let _ = web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Spelling Bee starting...");

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed)));

        render_voice_options(&app.borrow());
        render_word_list(&app.borrow());

        setup_study(app.clone());
        setup_speech_controls(app.clone());
        setup_word_list(app.clone());
        start_timer(app);
    }

    fn setup_study(app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            listen("start-btn", "click", move |_| {
                let word = {
                    let mut guard = app.borrow_mut();
                    let a = &mut *guard;
                    a.session
                        .start(&a.store, &mut a.rng, js_sys::Date::now())
                        .map(str::to_string)
                };
                set_class("start-screen", "hidden");
                set_class("study", "");
                present_word(app.clone(), word);
            });
        }

        {
            let app = app.clone();
            listen("play-btn", "click", move |_| {
                let a = app.borrow();
                if let Some(word) = a.session.current_word() {
                    a.speaker.speak(word);
                }
            });
        }

        {
            let app = app.clone();
            listen("next-btn", "click", move |event| {
                event.prevent_default();
                next_word(app.clone());
            });
        }

        listen("answer-form", "submit", move |event| {
            event.prevent_default();
            let Some(field) = input("answer-input") else { return };
            let outcome = {
                let mut guard = app.borrow_mut();
                let a = &mut *guard;
                a.session
                    .submit(&mut a.store, &field.value(), js_sys::Date::now())
            };
            match outcome {
                SubmitOutcome::NoWord => {}
                SubmitOutcome::Replay => {
                    let a = app.borrow();
                    if let Some(word) = a.session.current_word() {
                        a.speaker.speak(word);
                    }
                    let _ = field.focus();
                }
                SubmitOutcome::Advance => next_word(app.clone()),
                SubmitOutcome::Scored { correct, .. } => {
                    field.set_read_only(true);
                    show_feedback(if correct {
                        Feedback::Correct
                    } else {
                        Feedback::Incorrect
                    });
                    render_word_list(&app.borrow());
                }
            }
        });
    }

    fn next_word(app: Rc<RefCell<App>>) {
        let word = {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            a.session
                .next_word(&a.store, &mut a.rng, js_sys::Date::now())
                .map(str::to_string)
        };
        present_word(app, word);
    }

    /// Reset the answer area for a new word, then speak it
    fn present_word(app: Rc<RefCell<App>>, word: Option<String>) {
        let Some(word) = word else {
            set_text("study-status", "Your word list is empty. Add some words first.");
            return;
        };
        set_text("study-status", "");
        show_feedback(Feedback::Idle);
        if let Some(field) = input("answer-input") {
            field.set_value("");
            field.set_read_only(false);
            after(50, move || {
                let _ = field.focus();
            });
        }

        load_definition(app.clone(), word.clone());

        after(100, move || {
            if let Ok(a) = app.try_borrow() {
                a.speaker.speak(&word);
            }
        });
    }

    fn show_feedback(feedback: Feedback) {
        match feedback {
            Feedback::Idle => {
                set_class("answer-input", "answer");
                set_class("feedback", "hidden");
            }
            Feedback::Correct => {
                set_class("answer-input", "answer correct");
                set_class("feedback", "feedback correct");
                set_text("feedback-title", "Correct!");
            }
            Feedback::Incorrect => {
                set_class("answer-input", "answer incorrect");
                set_class("feedback", "feedback incorrect");
                set_text("feedback-title", "Incorrect");
            }
        }
    }

    fn load_definition(app: Rc<RefCell<App>>, word: String) {
        let ticket = app.borrow_mut().lookups.begin();
        set_text("def-word", &word);
        set_text("def-pos", "");
        set_text("def-phonetic", "");
        set_text("def-text", "Loading definition...");

        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_definition(&word).await;
            if !app.borrow().lookups.is_current(ticket) {
                return;
            }
            render_definition(&result);
        });
    }

    fn render_definition(result: &Result<Definition, LookupError>) {
        match result {
            Ok(def) => {
                set_text("def-pos", &def.part_of_speech);
                set_text("def-phonetic", def.phonetic.as_deref().unwrap_or(""));
                set_text("def-text", &def.definition);
            }
            Err(e) => {
                log::info!("Definition lookup: {}", e);
                set_text("def-text", "Definition not available.");
            }
        }
    }

    fn setup_speech_controls(app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            listen("voice-select", "change", move |_| {
                let Some(select) = element("voice-select")
                    .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
                else {
                    return;
                };
                let uri = select.value();
                let mut guard = app.borrow_mut();
                let a = &mut *guard;
                if a.speaker.voices().iter().any(|v| v.uri == uri) {
                    a.speaker.settings.set_voice(&mut a.prefs, Some(uri));
                }
            });
        }

        {
            let app = app.clone();
            listen("rate-input", "input", move |_| {
                let Some(field) = input("rate-input") else { return };
                let Ok(rate) = field.value().parse::<f32>() else { return };
                let mut guard = app.borrow_mut();
                let a = &mut *guard;
                a.speaker.settings.set_rate(&mut a.prefs, rate);
                set_text("rate-value", &format!("{:.1}x", a.speaker.settings.rate));
            });
        }

        let handler = {
            let app = app.clone();
            Closure::<dyn FnMut()>::new(move || {
                app.borrow_mut().speaker.refresh_voices();
                render_voice_options(&app.borrow());
            })
        };
        app.borrow()
            .speaker
            .set_on_voices_changed(Some(handler.as_ref().unchecked_ref()));
        handler.forget();
    }

    fn render_voice_options(app: &App) {
        let voices = app.speaker.voices();
        let selected = app.speaker.selected_voice();

        if voices.is_empty() {
            set_text("voice-count", "Loading voices...");
        } else {
            set_text("voice-count", &format!("{} voices detected", voices.len()));
        }
        if let Some(field) = input("rate-input") {
            field.set_value(&app.speaker.settings.rate.to_string());
        }
        set_text("rate-value", &format!("{:.1}x", app.speaker.settings.rate));

        let Some(select) = element("voice-select") else { return };
        select.set_text_content(None);
        let doc = document();
        for voice in &voices {
            let Ok(opt) = doc.create_element("option") else { continue };
            let _ = opt.set_attribute("value", &voice.uri);
            opt.set_text_content(Some(&voice.name));
            if selected.as_ref().is_some_and(|s| s.uri == voice.uri) {
                let _ = opt.set_attribute("selected", "");
            }
            let _ = select.append_child(&opt);
        }
    }

    fn setup_word_list(app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            listen("add-form", "submit", move |event| {
                event.prevent_default();
                let Some(field) = input("add-input") else { return };
                let text = field.value();
                if text.trim().is_empty() {
                    return;
                }
                app.borrow_mut().store.add_word(&text);
                field.set_value("");
                render_word_list(&app.borrow());
            });
        }

        for (id, key) in [
            ("sort-word", SortKey::Word),
            ("sort-attempts", SortKey::Attempts),
            ("sort-rate", SortKey::CorrectRate),
        ] {
            let app = app.clone();
            listen(id, "click", move |_| {
                app.borrow_mut().sort.request(key);
                render_word_list(&app.borrow());
            });
        }

        {
            // Delete buttons carry their word in data-word
            let app = app.clone();
            listen("word-rows", "click", move |event| {
                let Some(target) = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                else {
                    return;
                };
                let Some(word) = target.get_attribute("data-word") else { return };
                app.borrow_mut().store.delete_word(&word);
                render_word_list(&app.borrow());
            });
        }

        {
            let app = app.clone();
            listen("sync-btn", "click", move |_| {
                let added = app.borrow_mut().store.add_missing_defaults();
                let msg = if added == 0 {
                    "No new default words found.".to_string()
                } else {
                    format!("Added {} new words.", added)
                };
                set_text("sync-result", &msg);
                render_word_list(&app.borrow());
            });
        }

        listen("reset-btn", "click", move |_| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Reset all words and statistics?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            app.borrow_mut().store.reset_all();
            render_word_list(&app.borrow());
        });
    }

    fn render_word_list(app: &App) {
        set_text("word-count", &app.store.len().to_string());
        let Some(tbody) = element("word-rows") else { return };
        tbody.set_text_content(None);

        let doc = document();
        for rec in sorted(app.store.records(), app.sort) {
            let Ok(row) = doc.create_element("tr") else { continue };
            let cells = [
                rec.word.clone(),
                rec.total_attempts.to_string(),
                format_correct_rate(rec),
            ];
            for text in &cells {
                if let Ok(td) = doc.create_element("td") {
                    td.set_text_content(Some(text.as_str()));
                    let _ = row.append_child(&td);
                }
            }
            if let (Ok(td), Ok(btn)) = (doc.create_element("td"), doc.create_element("button")) {
                let _ = btn.set_attribute("class", "delete-btn");
                let _ = btn.set_attribute("data-word", &rec.word);
                btn.set_text_content(Some("Delete"));
                let _ = td.append_child(&btn);
                let _ = row.append_child(&td);
            }
            let _ = tbody.append_child(&row);
        }
    }

    /// Tick the on-screen attempt timer
    fn start_timer(app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut()>::new(move || {
            let Ok(a) = app.try_borrow() else { return };
            if a.session.current_word().is_none() {
                return;
            }
            let elapsed = a.session.elapsed_ms(js_sys::Date::now());
            set_text("timer", &format!("{:.1}s", elapsed / 1000.0));
        });
        let _ = web_sys::window()
            .unwrap()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                100,
            );
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Spelling Bee (native) starting...");
    log::info!("The drill runs in the browser - run with `trunk serve` for the web version");

    println!("\nSelection odds for a sample list:");
    print_selection_odds();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn print_selection_odds() {
    use spelling_bee::WordStore;
    use spelling_bee::consts::WORDS_KEY;
    use spelling_bee::persistence::MemoryStore;
    use spelling_bee::words::selector;

    let mut store = WordStore::open(MemoryStore::with_blob(WORDS_KEY, "[]"));
    for word in ["cat", "dog", "heron"] {
        store.add_word(word);
    }
    for (word, outcomes) in [
        ("cat", [false, false, true, false]),
        ("dog", [true, true, true, true]),
    ] {
        for ok in outcomes {
            store.record_attempt(word, ok, 1500.0);
        }
    }

    let probs = selector::probabilities(store.records());
    for (rec, p) in store.records().iter().zip(probs) {
        println!(
            "  {:<8} weight {:>6.3}  chance {:>5.1}%",
            rec.word,
            selector::weight(rec),
            p * 100.0
        );
    }
}

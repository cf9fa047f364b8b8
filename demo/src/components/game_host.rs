//! Hosts the cube game on a full-size canvas.
//!
//! SYSTEM CONTEXT
//! ==============
//! The canvas element is the gesture target for all six hooks; each hook
//! forwards into the matching `GameCore` handler. Once the canvas mounts a
//! `cube::game::Game` is created and driven from a requestAnimationFrame
//! loop until the component is cleaned up.

use std::cell::RefCell;
use std::rc::Rc;
#[cfg(feature = "csr")]
use std::sync::Arc;
#[cfg(feature = "csr")]
use std::sync::atomic::{AtomicBool, Ordering};

use cube::game::Game;
use gestures::options::{DoubleTapOptions, DragOptions, PinchOptions, PressOptions, SwipeOptions, TapOptions};
use gestures::swipe::SwipeDirection;
use hooks::{GestureTarget, use_double_tap, use_drag, use_pinch, use_press, use_swipe, use_tap};
use leptos::prelude::*;

#[cfg(feature = "csr")]
use cube::config::GameConfig;
#[cfg(feature = "csr")]
use leptos::logging::warn;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

type SharedGame = Rc<RefCell<Option<Game>>>;

#[cfg(feature = "csr")]
type FrameHolder = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn with_game(game: &SharedGame, f: impl FnOnce(&mut Game)) {
    if let Some(game) = game.borrow_mut().as_mut() {
        f(game);
    }
}

/// Configuration from the page's query string (`?seed=7&obstacles=60`).
#[cfg(feature = "csr")]
fn page_config() -> GameConfig {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|query| GameConfig::from_query(&query))
        .unwrap_or_default()
}

#[cfg(feature = "csr")]
fn request_frame(holder: &FrameHolder) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(cb) = holder.borrow().as_ref() {
        if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            warn!("requestAnimationFrame failed: {err:?}");
        }
    }
}

/// Drive `game` every animation frame while `alive` holds.
#[cfg(feature = "csr")]
fn start_loop(game: SharedGame, error: RwSignal<Option<String>>, alive: Arc<AtomicBool>) {
    let holder: FrameHolder = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let mut last_ts = None::<f64>;
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if !alive.load(Ordering::Relaxed) {
            // Break the holder cycle; wasm-bindgen frees this closure once
            // the current frame returns.
            drop(holder_for_cb.borrow_mut().take());
            return;
        }
        let dt = last_ts.map_or(0.0, |prev| (ts - prev) / 1000.0);
        last_ts = Some(ts);
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        with_game(&game, |game| {
            game.sync_size(dpr);
            game.core.update(dt);
            if let Err(err) = game.render() {
                warn!("render failed: {err}");
                error.set(Some(err.to_string()));
            }
        });
        request_frame(&holder_for_cb);
    }) as Box<dyn FnMut(f64)>);
    *holder.borrow_mut() = Some(cb);
    request_frame(&holder);
}

/// Game canvas with gesture controls.
#[component]
pub fn GameHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let error = RwSignal::new(None::<String>);
    let game: SharedGame = Rc::new(RefCell::new(None));
    let target = GestureTarget::node(canvas_ref);

    {
        let game = Rc::clone(&game);
        use_swipe(
            target.clone(),
            move |_, swipe| with_game(&game, |g| g.core.on_swipe(&swipe)),
            SwipeDirection::Both,
            SwipeOptions::default(),
        );
    }
    {
        let game = Rc::clone(&game);
        use_tap(target.clone(), move |_, _| with_game(&game, |g| g.core.on_tap()), TapOptions::default());
    }
    {
        let game = Rc::clone(&game);
        use_double_tap(
            target.clone(),
            move |_, _| with_game(&game, |g| g.core.on_double_tap()),
            DoubleTapOptions::default(),
        );
    }
    {
        let game = Rc::clone(&game);
        use_press(target.clone(), move |_, _| with_game(&game, |g| g.core.on_press()), PressOptions::default());
    }
    {
        let game = Rc::clone(&game);
        use_drag(target.clone(), move |_, drag| with_game(&game, |g| g.core.on_drag(&drag)), DragOptions::default());
    }
    {
        let game = Rc::clone(&game);
        use_pinch(target, move |_, pinch| with_game(&game, |g| g.core.on_pinch(&pinch)), PinchOptions::default());
    }

    #[cfg(feature = "csr")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        {
            let alive = Arc::clone(&alive);
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }
        let game = Rc::clone(&game);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if game.borrow().is_some() {
                return;
            }
            match Game::new(canvas, page_config()) {
                Ok(instance) => {
                    log::info!("cube: seed {}", instance.core.config.seed);
                    *game.borrow_mut() = Some(instance);
                    start_loop(Rc::clone(&game), error, Arc::clone(&alive));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    }

    view! {
        <div class="game-host">
            <canvas node_ref=canvas_ref></canvas>
            {move || error.get().map(|message| view! { <div class="game-host__error">{message}</div> })}
        </div>
    }
}

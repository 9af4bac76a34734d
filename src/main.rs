//! Mati entry point
//!
//! In the browser this mounts the routed views (movie list, tactical board).
//! Natively it computes the court from the settings, logs the sorted movies
//! and writes the court as SVG to stdout.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, HtmlInputElement};

    use mati::court::{CourtParameters, court_geometry};
    use mati::renderer::{RenderState, Stage};
    use mati::ui::{self, BoardInput, ids};
    use mati::{Error, MovieStore, Result, Route, Settings};

    type Listener = Closure<dyn FnMut(web_sys::Event)>;

    /// Mounted tactical board; dropping it releases the stage
    struct BoardView {
        mount: u64,
        params: CourtParameters,
        stage: Stage,
        canvas: HtmlCanvasElement,
        _listeners: Vec<Listener>,
    }

    impl BoardView {
        fn set_input(&mut self, document: &Document, input: BoardInput, value: f32) {
            let params = input.apply(self.params, value);
            if params == self.params {
                return;
            }
            self.params = params;
            if let Some(label) = document.get_element_by_id(&input.label_id()) {
                label.set_text_content(Some(&input.label_text(&params)));
            }
            self.redraw();
        }

        /// Full recomputation from the current parameters
        fn redraw(&mut self) {
            let geometry = court_geometry(&self.params);
            let (width, height) = geometry.canvas_size();
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.stage.draw(&geometry);
            self.present();
        }

        fn present(&mut self) {
            match self.stage.present() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::OutOfMemory) => log::error!("Out of memory!"),
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    enum View {
        Home { _listeners: Vec<Listener> },
        Board(BoardView),
    }

    struct App {
        settings: Settings,
        movies: MovieStore,
        document: Document,
        route: Option<Route>,
        view: Option<View>,
        mounts: u64,
    }

    impl App {
        fn element(&self, id: &str) -> Result<Element> {
            self.document
                .get_element_by_id(id)
                .ok_or_else(|| Error::Dom(format!("missing element #{id}")))
        }

        fn render_movie_list(&self) {
            if let Ok(list) = self.element(ids::MOVIE_LIST) {
                list.set_inner_html(&ui::movie_list_html(&self.movies));
            }
        }
    }

    fn js_err(e: JsValue) -> Error {
        Error::Dom(format!("{e:?}"))
    }

    fn current_route() -> (Route, String) {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        (Route::resolve(&hash), hash)
    }

    fn navigate(app: &Rc<RefCell<App>>) {
        let (route, hash) = current_route();
        if hash != route.href() {
            // Redirect; the resulting hashchange navigates again
            if let Some(window) = web_sys::window()
                && let Err(e) = window.location().set_hash(&route.href())
            {
                log::error!("Failed to redirect to {}: {}", route.href(), js_err(e));
            }
        }

        {
            let mut a = app.borrow_mut();
            if a.route == Some(route) {
                return;
            }
            log::info!("Navigating to {}", route.path());
            // Tear down the previous view before its markup is replaced
            a.view = None;
            a.route = Some(route);
            a.document.set_title(route.title());
        }

        let mounted = match route {
            Route::Home => mount_home(app),
            Route::TacticalBoard => mount_board(app),
        };
        if let Err(e) = mounted {
            log::error!("Failed to mount {}: {}", route.path(), e);
        }
    }

    fn mount_home(app: &Rc<RefCell<App>>) -> Result<()> {
        let mut a = app.borrow_mut();
        a.element(ids::OUTLET)?
            .set_inner_html(&ui::movie_view_html(&a.movies));

        let toggle = {
            let app = app.clone();
            Listener::new(move |_event: web_sys::Event| {
                let mut a = app.borrow_mut();
                a.movies.toggle_order();
                a.render_movie_list();
            })
        };
        a.element(ids::ORDER_TOGGLE)?
            .add_event_listener_with_callback("click", toggle.as_ref().unchecked_ref())
            .map_err(js_err)?;

        let query = {
            let app = app.clone();
            Listener::new(move |event: web_sys::Event| {
                let Some(input) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                else {
                    return;
                };
                let mut a = app.borrow_mut();
                a.movies.set_query(input.value());
                a.render_movie_list();
            })
        };
        a.element(ids::QUERY_INPUT)?
            .add_event_listener_with_callback("input", query.as_ref().unchecked_ref())
            .map_err(js_err)?;

        a.view = Some(View::Home {
            _listeners: vec![toggle, query],
        });
        Ok(())
    }

    fn mount_board(app: &Rc<RefCell<App>>) -> Result<()> {
        let mut a = app.borrow_mut();
        a.mounts += 1;
        let mount = a.mounts;
        let params = a.settings.court;

        a.element(ids::OUTLET)?
            .set_inner_html(&ui::board_controls_html(&params, &a.settings.slider));

        let canvas: HtmlCanvasElement = a
            .document
            .create_element("canvas")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| Error::Dom("created element is not a canvas".into()))?;
        canvas.set_id(ids::BOARD_CANVAS);
        a.element(ids::BOARD_CONTAINER)?
            .append_child(&canvas)
            .map_err(js_err)?;

        let geometry = court_geometry(&params);
        let (width, height) = geometry.canvas_size();
        canvas.set_width(width);
        canvas.set_height(height);
        let stage = Stage::for_geometry(&geometry, a.settings.segments_per_radian());

        let mut listeners = Vec::with_capacity(BoardInput::ALL.len());
        for input in BoardInput::ALL {
            let listener = {
                let app = app.clone();
                Listener::new(move |event: web_sys::Event| {
                    let Some(value) = event
                        .target()
                        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                        .map(|el| el.value_as_number() as f32)
                    else {
                        return;
                    };
                    let mut a = app.borrow_mut();
                    let document = a.document.clone();
                    if let Some(View::Board(board)) = a.view.as_mut() {
                        board.set_input(&document, input, value);
                    }
                })
            };
            a.element(input.id())?
                .add_event_listener_with_callback("input", listener.as_ref().unchecked_ref())
                .map_err(js_err)?;
            listeners.push(listener);
        }

        a.view = Some(View::Board(BoardView {
            mount,
            params,
            stage,
            canvas: canvas.clone(),
            _listeners: listeners,
        }));
        drop(a);

        let app = app.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match create_render_state(canvas, width, height).await {
                Ok(render_state) => {
                    let mut a = app.borrow_mut();
                    match a.view.as_mut() {
                        Some(View::Board(board)) if board.mount == mount => {
                            board.stage.attach(render_state);
                            board.present();
                        }
                        _ => {
                            log::info!("Board unmounted before the GPU was ready");
                            render_state.destroy();
                        }
                    }
                }
                Err(e) => log::error!("{e}"),
            }
        });

        Ok(())
    }

    async fn create_render_state(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<RenderState> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| Error::Gpu(format!("failed to create surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| Error::Gpu(format!("failed to get adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height).await
    }

    fn start(settings: Settings) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Dom("no document".into()))?;

        let root: Element = match document.get_element_by_id("app") {
            Some(root) => root,
            None => document
                .body()
                .ok_or_else(|| Error::Dom("no body".into()))?
                .into(),
        };
        root.set_inner_html(&format!(
            "{}<main id=\"{}\"></main>",
            ui::nav_html(),
            ids::OUTLET
        ));

        let app = Rc::new(RefCell::new(App {
            settings,
            movies: MovieStore::default(),
            document,
            route: None,
            view: None,
            mounts: 0,
        }));

        let on_hash_change = {
            let app = app.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| navigate(&app))
        };
        window
            .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
            .map_err(js_err)?;
        on_hash_change.forget();

        navigate(&app);
        Ok(())
    }

    pub async fn run() {
        console_error_panic_hook::set_once();

        let settings = Settings::load();
        let level = settings
            .as_ref()
            .map(|s| s.log_level.to_level())
            .unwrap_or(log::Level::Info);
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
        let settings = settings.unwrap_or_else(|e| {
            log::error!("{e}; using default settings");
            Settings::default()
        });

        log::info!("Mati starting...");
        match start(settings) {
            Ok(()) => log::info!("Mati running!"),
            Err(e) => log::error!("Mati failed to start: {e}"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), mati::Error> {
    use mati::{MovieStore, Settings, court_geometry, renderer::to_svg};

    let path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let settings = match Settings::load_from(path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            env_logger::init();
            log::error!("Failed to load settings: {e}");
            return Err(e);
        }
    };

    env_logger::Builder::new()
        .filter_level(settings.log_level.to_level().to_level_filter())
        .parse_default_env()
        .init();
    log::info!("Mati (native) starting...");

    let geometry = court_geometry(&settings.court);
    log::info!(
        "Court {}x{} px ({} m x {} m at {} px/m)",
        geometry.width,
        geometry.height,
        settings.court.width_meters,
        settings.court.height_meters,
        settings.court.pixels_per_meter
    );
    for shape in &geometry.shapes {
        log::debug!("{}: {:?}", shape.name, shape.primitive);
    }

    let store = MovieStore::default();
    log::info!("{} movies, order {}", store.movie_counts(), store.filter().order.as_str());
    for movie in store.sorted_movies() {
        log::info!("  {} ({}) {}", movie.title, movie.year, movie.rating);
    }

    println!("{}", to_svg(&geometry));
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

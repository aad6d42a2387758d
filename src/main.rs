// src/main.rs
//
// Calculatrice Fraction — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice Fraction";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // RUST_LOG=debug pour suivre les évaluations
    if let Err(e) = tracing_subscriber::fmt::try_init() {
        eprintln!("traces indisponibles : {e}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 740.0])
            .with_min_inner_size([420.0, 620.0]),
        ..Default::default()
    };

    tracing::info!("démarrage {TITRE_APP}");

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}

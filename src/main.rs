// src/main.rs
//
// Calculatrice scientifique — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------------
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//                                 + journal console (filtre via CALC_LOG)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice scientifique";

/* ------------------------ Journal (natif) ------------------------ */

/// Variable d’environnement du filtre de journal (ex: CALC_LOG=debug).
#[cfg(not(target_arch = "wasm32"))]
const ENV_JOURNAL: &str = "CALC_LOG";

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal() {
    use tracing_subscriber::EnvFilter;

    let filtre = EnvFilter::try_from_env(ENV_JOURNAL).unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init : pas de panique si un abonné est déjà installé.
    // Le pont tracing-log fait suivre les enregistrements `log` du noyau.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_target(true)
        .try_init();
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    installer_journal();
    log::info!("démarrage de {TITRE_APP}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([360.0, 520.0]),
        ..Default::default()
    };

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

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}

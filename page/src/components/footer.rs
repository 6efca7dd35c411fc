//! Page footer

use leptos::prelude::*;

#[component]
pub fn Footer(business_name: String, year: u16) -> impl IntoView {
    view! {
        <footer class="page-footer">
            <p>{format!("© {} {}. Todos los derechos reservados.", year, business_name)}</p>
            <div class="footer-links">
                <a href="#">"Privacidad"</a>
                <a href="#">"Términos"</a>
                <a href="#">"Contacto"</a>
            </div>
        </footer>
    }
}

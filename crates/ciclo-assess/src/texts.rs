//! User-facing Spanish titles and bodies per assessment state.

use ciclo_core::AssessmentState;

pub fn title(state: AssessmentState) -> &'static str {
    match state {
        AssessmentState::Inicio => "Inicio de fertilidad",
        AssessmentState::Aumento => "Fertilidad en aumento",
        AssessmentState::Alta => "Fertilidad alta",
        AssessmentState::MuyAlta => "Fertilidad muy alta",
        AssessmentState::Waiting => "Esperando confirmación",
        AssessmentState::Infertil => "Infértil",
    }
}

pub fn body(state: AssessmentState, inherited: bool) -> String {
    let base = match state {
        AssessmentState::Inicio => "La ventana fértil ha comenzado.",
        AssessmentState::Aumento => "Los signos fértiles van en aumento.",
        AssessmentState::Alta => "Signos de fertilidad alta.",
        AssessmentState::MuyAlta => "Máxima fertilidad alrededor del día pico.",
        AssessmentState::Waiting => {
            "Fertilidad mantenida a la espera de la confirmación del segundo criterio."
        }
        AssessmentState::Infertil => "Infertilidad confirmada por doble control.",
    };
    if inherited {
        format!("{base} Estimado a partir del último día registrado.")
    } else {
        base.to_string()
    }
}

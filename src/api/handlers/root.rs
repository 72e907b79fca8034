/*
 * Responsibility
 * - GET / (バージョン付きの挨拶)
 */
use axum::extract::State;

use crate::state::AppState;

pub fn greeting(version: &str) -> String {
    format!("Hello from GitOps Demo v{version}\n")
}

pub async fn root(State(state): State<AppState>) -> String {
    greeting(&state.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_embeds_version() {
        assert_eq!(greeting("0.1.0"), "Hello from GitOps Demo v0.1.0\n");
        assert_eq!(greeting("2.3.1"), "Hello from GitOps Demo v2.3.1\n");
    }
}

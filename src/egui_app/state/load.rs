/// Progress of a background fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T, E: ToString> From<Result<T, E>> for LoadState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: LoadState<u32> = LoadState::default();
        assert_eq!(state, LoadState::Idle);
        assert!(!state.is_loading());
        assert!(state.loaded().is_none());
    }

    #[test]
    fn test_from_result() {
        let ok: LoadState<u32> = Ok::<u32, String>(3).into();
        assert_eq!(ok.loaded(), Some(&3));

        let failed: LoadState<u32> = Err::<u32, String>("boom".to_string()).into();
        assert_eq!(failed.error(), Some("boom"));
    }
}

use crate::error::AppError;
use log::debug;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

pub const TOKEN_FILE_NAME: &str = ".gittoken";

/// `$HOME/.gittoken`
pub fn token_path() -> Result<PathBuf, AppError> {
    dirs::home_dir()
        .map(|home| home.join(TOKEN_FILE_NAME))
        .ok_or_else(|| AppError::Auth {
            path: Path::new("~").join(TOKEN_FILE_NAME),
        })
}

/// Reads the personal access token stored at `path`, without surrounding whitespace.
pub fn read_token(path: &Path) -> Result<String, AppError> {
    let data = read_to_string(path).map_err(|e| {
        debug!("could not read token file {}: {}", path.display(), e);
        AppError::Auth {
            path: path.to_path_buf(),
        }
    })?;

    let token = data.trim();
    if token.is_empty() {
        return Err(AppError::Auth {
            path: path.to_path_buf(),
        });
    }

    Ok(String::from(token))
}

pub fn load_token() -> Result<String, AppError> {
    read_token(&token_path()?)
}

#[cfg(test)]
mod tests {
    use super::{read_token, TOKEN_FILE_NAME};
    use crate::error::AppError;
    use std::fs::write;
    use tempfile::tempdir;

    #[test]
    fn trims_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TOKEN_FILE_NAME);
        write(&path, "  ghp_abc123\n").unwrap();

        assert_eq!("ghp_abc123", read_token(&path).unwrap());
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TOKEN_FILE_NAME);

        match read_token(&path) {
            Err(AppError::Auth { path: p }) => assert_eq!(path, p),
            other => panic!("expected Auth error, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TOKEN_FILE_NAME);
        write(&path, " \n\t\n").unwrap();

        assert!(matches!(read_token(&path), Err(AppError::Auth { .. })));
    }
}

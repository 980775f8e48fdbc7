use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// Decoded RGBA8 image ready for upload.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 rows, top row first.
    pub rgba: Vec<u8>,
}

/// A finished load, keyed by the request key.
struct Completed<K> {
    key: K,
    path: PathBuf,
    result: Result<LoadedImage, String>,
}

/// Fire-and-forget image decoding on background threads.
///
/// [`load`](Self::load) spawns a decoder thread per request;
/// [`poll`](Self::poll) drains whatever has finished without blocking.
/// Failed loads are logged and never reported to the caller, so the
/// object that wanted the image simply stays untextured.
pub struct TextureLoader<K> {
    sender: Sender<Completed<K>>,
    receiver: Receiver<Completed<K>>,
    pending: usize,
}

impl<K: Send + 'static> TextureLoader<K> {
    /// Create a loader with nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            pending: 0,
        }
    }

    /// Number of requests that have not been drained yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Start decoding `path` in the background.
    pub fn load(&mut self, key: K, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        let sender = self.sender.clone();
        let thread_path = path.clone();

        let spawned = thread::Builder::new()
            .name("texture-loader".into())
            .spawn(move || {
                let result = decode(&thread_path);
                // The loader may have been dropped; nobody is left to care.
                let _ = sender.send(Completed {
                    key,
                    path: thread_path,
                    result,
                });
            });

        match spawned {
            Ok(_) => self.pending += 1,
            Err(e) => log::warn!("could not start loader for {}: {e}", path.display()),
        }
    }

    /// Take every image that finished since the last poll.
    pub fn poll(&mut self) -> Vec<(K, LoadedImage)> {
        let mut ready = Vec::new();
        while let Ok(completed) = self.receiver.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            match completed.result {
                Ok(image) => {
                    log::debug!(
                        "loaded {} ({}x{})",
                        completed.path.display(),
                        image.width,
                        image.height
                    );
                    ready.push((completed.key, image));
                }
                Err(e) => {
                    log::warn!("failed to load {}: {e}", completed.path.display());
                }
            }
        }
        ready
    }
}

impl<K: Send + 'static> Default for TextureLoader<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(path: &Path) -> Result<LoadedImage, String> {
    let image = image::open(path).map_err(|e| e.to_string())?.to_rgba8();
    let (width, height) = image.dimensions();
    Ok(LoadedImage {
        width,
        height,
        rgba: image.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn drain<K: Send + 'static>(loader: &mut TextureLoader<K>) -> Vec<(K, LoadedImage)> {
        let deadline = Instant::now() + Duration::from_secs(10);
        let mut ready = Vec::new();
        while loader.pending() > 0 && Instant::now() < deadline {
            ready.extend(loader.poll());
            thread::sleep(Duration::from_millis(5));
        }
        ready
    }

    #[test]
    fn decodes_png_in_background() {
        let dir = std::env::temp_dir().join(format!("planetscape-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tiny.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 69, 0, 255]))
            .save(&path)
            .unwrap();

        let mut loader = TextureLoader::new();
        loader.load("tiny", &path);
        assert_eq!(loader.pending(), 1);

        let ready = drain(&mut loader);
        assert_eq!(ready.len(), 1);
        let (key, image) = &ready[0];
        assert_eq!(*key, "tiny");
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!(image.rgba.len(), 3 * 2 * 4);
        assert_eq!(&image.rgba[..4], &[255_u8, 69, 0, 255]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_dropped_quietly() {
        let mut loader = TextureLoader::new();
        loader.load(1_u8, "does/not/exist.jpg");
        assert!(drain(&mut loader).is_empty());
        assert_eq!(loader.pending(), 0);
    }

    #[test]
    fn poll_never_blocks_when_idle() {
        let mut loader: TextureLoader<u8> = TextureLoader::new();
        assert!(loader.poll().is_empty());
    }
}

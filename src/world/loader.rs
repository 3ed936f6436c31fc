use super::bubble::BubbleSink;
use super::client::WorldClient;
use super::selector::WorldSelector;
use super::types::{WorldDetail, WorldItem};
use crate::error::{Error, Result};

/// Fetches the world list, tracks the selection, and resizes the injected
/// bubble when a world is connected.
pub struct WorldLoader<B: BubbleSink> {
    client: WorldClient,
    selector: WorldSelector,
    bubble: Option<B>,
    current: Option<WorldDetail>,
}

impl<B: BubbleSink> WorldLoader<B> {
    pub fn new(client: WorldClient, bubble: Option<B>) -> Self {
        if bubble.is_none() {
            log::warn!("world loader has no bubble, world borders will not be shown");
        }

        Self {
            client,
            selector: WorldSelector::new(),
            bubble,
            current: None,
        }
    }

    pub fn selector(&self) -> &WorldSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut WorldSelector {
        &mut self.selector
    }

    pub fn bubble(&self) -> Option<&B> {
        self.bubble.as_ref()
    }

    /// Detail of the last successfully connected world.
    pub fn current(&self) -> Option<&WorldDetail> {
        self.current.as_ref()
    }

    /// Fetch and show the world list. On failure the previous list stays.
    pub async fn load_world_list(&mut self) -> Result<usize> {
        let worlds = self.client.fetch_worlds().await?;
        Ok(self.apply_world_list(worlds))
    }

    pub fn apply_world_list(&mut self, worlds: Vec<WorldItem>) -> usize {
        let count = worlds.len();
        self.selector.populate(worlds);
        log::info!("received {count} worlds");
        count
    }

    /// Fetch the selected world and scale the bubble to it.
    pub async fn connect_selected(&mut self) -> Result<WorldDetail> {
        let Some(selected) = self.selector.selected() else {
            log::warn!("world list is empty, nothing to connect to");
            return Err(Error::NoWorlds);
        };

        log::info!("connecting to world {}", selected.label());
        let world_id = selected.world_id.clone();
        let detail = self.client.fetch_world(&world_id).await?;
        self.apply_detail(detail.clone());
        Ok(detail)
    }

    pub fn apply_detail(&mut self, detail: WorldDetail) {
        log::info!(
            "received world {} | radius={} | version={}",
            detail.name,
            detail.radius,
            detail.version
        );

        match self.bubble.as_mut() {
            Some(bubble) => bubble.apply_radius(detail.radius),
            None => log::warn!("no world bubble, cannot show the border of {}", detail.name),
        }

        self.current = Some(detail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingBubble {
        radii: Vec<f32>,
    }

    impl BubbleSink for RecordingBubble {
        fn apply_radius(&mut self, radius: f32) {
            self.radii.push(radius);
        }
    }

    fn unreachable_client() -> WorldClient {
        // Port 9 (discard) on localhost; nothing should answer.
        let http = reqwest::Client::builder()
            .no_proxy()
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .unwrap();
        WorldClient::with_http("http://127.0.0.1:9/api", http)
    }

    fn item(id: &str) -> WorldItem {
        WorldItem {
            world_id: id.to_string(),
            name: format!("World {id}"),
        }
    }

    #[test]
    fn apply_detail_forwards_radius_to_bubble() {
        let mut loader = WorldLoader::new(unreachable_client(), Some(RecordingBubble::default()));
        loader.apply_detail(WorldDetail {
            world_id: "w-1".to_string(),
            radius: 128.0,
            ..Default::default()
        });

        assert_eq!(loader.bubble().unwrap().radii, vec![128.0]);
        assert_eq!(loader.current().unwrap().world_id, "w-1");
    }

    #[test]
    fn apply_detail_without_bubble_still_records_world() {
        let mut loader: WorldLoader<RecordingBubble> = WorldLoader::new(unreachable_client(), None);
        loader.apply_detail(WorldDetail {
            world_id: "w-2".to_string(),
            ..Default::default()
        });
        assert_eq!(loader.current().unwrap().world_id, "w-2");
    }

    #[tokio::test]
    async fn connect_with_empty_list_fails() {
        let mut loader = WorldLoader::new(unreachable_client(), Some(RecordingBubble::default()));
        assert!(matches!(loader.connect_selected().await, Err(Error::NoWorlds)));
        assert!(loader.bubble().unwrap().radii.is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_list() {
        let mut loader = WorldLoader::new(unreachable_client(), Some(RecordingBubble::default()));
        loader.apply_world_list(vec![item("a"), item("b")]);
        loader.selector_mut().select(1);

        assert!(loader.load_world_list().await.is_err());
        assert_eq!(loader.selector().worlds().len(), 2);
        assert_eq!(loader.selector().selected_index(), 1);
    }
}

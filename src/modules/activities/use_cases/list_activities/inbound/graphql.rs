use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::core::activity::Activity;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub spots_left: u32,
}

impl GqlActivity {
    fn from_activity(name: String, activity: Activity) -> Self {
        let spots_left = activity.spots_left();
        Self {
            name,
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
            spots_left,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let activities = state.registry.get_all().await?;
        Ok(activities
            .into_iter()
            .map(|(name, activity)| GqlActivity::from_activity(name, activity))
            .collect())
    }

    async fn activity(&self, context: &Context<'_>, name: String) -> GqlResult<Option<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let loaded = state.registry.find(&name).await?;
        Ok(loaded.map(|loaded| GqlActivity::from_activity(name, loaded.activity)))
    }
}

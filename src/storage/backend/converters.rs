//! Row ⇄ domain mapping. The only place that touches `link::Model` fields.

use crate::storage::{Link, NewLink};
use migration::entities::link;

/// 将 Sea-ORM Model 转换为 Link
pub fn model_to_link(model: link::Model) -> Link {
    Link {
        id: model.id,
        description: model.description,
        tags: model.tags,
        url: model.url,
        file_group: model.file_group,
    }
}

/// 将 NewLink 转换为 ActiveModel；id 始终由数据库分配，不在此处设置
pub fn new_link_to_active_model(link: &NewLink) -> link::ActiveModel {
    use sea_orm::ActiveValue::*;

    link::ActiveModel {
        id: NotSet,
        description: Set(link.description.clone()),
        tags: Set(link.tags.clone()),
        url: Set(link.url.clone()),
        file_group: Set(link.file_group.clone()),
    }
}

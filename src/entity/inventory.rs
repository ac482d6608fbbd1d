use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub condition_id: i32,
    pub status: String,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    pub redistributed_to_partner_id: Option<i32>,
    pub logistics_status: Option<String>,
    pub received_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::toy_conditions::Entity",
        from = "Column::ConditionId",
        to = "super::toy_conditions::Column::Id"
    )]
    ToyConditions,
    #[sea_orm(
        belongs_to = "super::partners::Entity",
        from = "Column::RedistributedToPartnerId",
        to = "super::partners::Column::Id"
    )]
    Partners,
    #[sea_orm(has_one = "super::donations::Entity")]
    Donations,
}

impl Related<super::toy_conditions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ToyConditions.def()
    }
}

impl Related<super::partners::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Partners.def()
    }
}

impl Related<super::donations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

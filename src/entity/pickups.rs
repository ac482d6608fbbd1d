use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pickups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub pickup_type: String,
    pub address: Option<String>,
    pub location_id: Option<i32>,
    pub partner_id: Option<i32>,
    pub pickup_date: Date,
    pub time_slot: String,
    pub status: String,
    pub toy_condition_id: i32,
    pub accessory_type_id: i32,
    pub notes: Option<String>,
    pub collection_cost: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::locations::Entity",
        from = "Column::LocationId",
        to = "super::locations::Column::Id"
    )]
    Locations,
    #[sea_orm(
        belongs_to = "super::partners::Entity",
        from = "Column::PartnerId",
        to = "super::partners::Column::Id"
    )]
    Partners,
    #[sea_orm(
        belongs_to = "super::toy_conditions::Entity",
        from = "Column::ToyConditionId",
        to = "super::toy_conditions::Column::Id"
    )]
    ToyConditions,
    #[sea_orm(
        belongs_to = "super::accessory_types::Entity",
        from = "Column::AccessoryTypeId",
        to = "super::accessory_types::Column::Id"
    )]
    AccessoryTypes,
}

impl Related<super::locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl Related<super::partners::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Partners.def()
    }
}

impl Related<super::toy_conditions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ToyConditions.def()
    }
}

impl Related<super::accessory_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessoryTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

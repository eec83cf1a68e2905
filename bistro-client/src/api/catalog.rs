//! Catalog APIs - dishes, categories, ingredients and menus

use shared::models::{
    Category, CategoryCreate, CategoryUpdate, Dish, DishCreate, DishUpdate, Id, Ingredient,
    IngredientCreate, IngredientUpdate, Menu, MenuCreate, MenuUpdate,
};
use shared::response::ApiResponse;

use super::into_data;
use crate::ClientResult;
use crate::client::HttpClient;

/// CRUD wrapper over one catalog collection
macro_rules! catalog_api {
    ($name:ident, $path:literal, $what:literal, $item:ty, $create:ty, $update:ty) => {
        pub struct $name<'a, C: HttpClient> {
            http: &'a C,
        }

        impl<'a, C: HttpClient> $name<'a, C> {
            pub fn new(http: &'a C) -> Self {
                Self { http }
            }

            pub async fn list(&self) -> ClientResult<Vec<$item>> {
                let resp: ApiResponse<Vec<$item>> = self.http.get($path).await?;
                into_data(resp, $what)
            }

            pub async fn get(&self, id: Id) -> ClientResult<$item> {
                let resp: ApiResponse<$item> =
                    self.http.get(&format!("{}/{}", $path, id)).await?;
                into_data(resp, $what)
            }

            pub async fn create(&self, req: &$create) -> ClientResult<$item> {
                let resp: ApiResponse<$item> = self.http.post($path, req).await?;
                into_data(resp, $what)
            }

            pub async fn update(&self, id: Id, req: &$update) -> ClientResult<$item> {
                let resp: ApiResponse<$item> =
                    self.http.put(&format!("{}/{}", $path, id), req).await?;
                into_data(resp, $what)
            }

            pub async fn delete(&self, id: Id) -> ClientResult<$item> {
                let resp: ApiResponse<$item> =
                    self.http.delete(&format!("{}/{}", $path, id)).await?;
                into_data(resp, $what)
            }
        }
    };
}

catalog_api!(DishApi, "dishes", "dish", Dish, DishCreate, DishUpdate);
catalog_api!(
    CategoryApi,
    "categories",
    "category",
    Category,
    CategoryCreate,
    CategoryUpdate
);
catalog_api!(
    IngredientApi,
    "ingredients",
    "ingredient",
    Ingredient,
    IngredientCreate,
    IngredientUpdate
);
catalog_api!(MenuApi, "menus", "menu", Menu, MenuCreate, MenuUpdate);

impl<'a, C: HttpClient> MenuApi<'a, C> {
    /// Make this menu the one guests see; others are deactivated
    pub async fn activate(&self, id: Id) -> ClientResult<Menu> {
        let resp: ApiResponse<Menu> = self
            .http
            .post_empty(&format!("menus/{}/activate", id))
            .await?;
        into_data(resp, "menu")
    }
}

use crate::player::{Player, PlayerPosition};

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<String>,
    league_id: Option<String>,
    name: Option<String>,
    club: Option<String>,
    position: Option<PlayerPosition>,
    price: Option<f64>,
    form: Option<f64>,
    projected_points: Option<f64>,
    is_injured: Option<bool>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn league_id(mut self, league_id: impl Into<String>) -> Self {
        self.league_id = Some(league_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into());
        self
    }

    pub fn position(mut self, position: PlayerPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn form(mut self, form: f64) -> Self {
        self.form = Some(form);
        self
    }

    pub fn projected_points(mut self, projected_points: f64) -> Self {
        self.projected_points = Some(projected_points);
        self
    }

    pub fn injured(mut self, is_injured: bool) -> Self {
        self.is_injured = Some(is_injured);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let id = self.id.ok_or("id is required")?;
        let name = self.name.unwrap_or_else(|| id.clone());

        Ok(Player {
            id,
            league_id: self.league_id.unwrap_or_default(),
            name,
            club: self.club.ok_or("club is required")?,
            position: self.position.ok_or("position is required")?,
            price: self.price.ok_or("price is required")?,
            form: self.form.unwrap_or(0.0),
            projected_points: self.projected_points.unwrap_or(0.0),
            is_injured: self.is_injured.unwrap_or(false),
        })
    }
}

use bevy::prelude::Component;

/// Facing direction as last seen by the presentation layer.
#[derive(Debug, Component)]
pub struct Facing {
    pub right: WithPrevious<bool>,
}

impl Facing {
    pub fn new(right: bool) -> Facing {
        Facing {
            right: WithPrevious::new(right),
        }
    }

    pub fn changed(&self) -> bool {
        self.right.previous.is_some() && !self.right.is_same_as_previous()
    }
}

#[derive(Debug, Default)]
pub struct WithPrevious<T> {
    pub current: T,
    pub previous: Option<T>
}

impl<T> WithPrevious<T> {
    pub fn new(initial_value: T) -> WithPrevious<T> {
        WithPrevious {
            current: initial_value,
            previous: None,
        }
    }

    pub fn update_value(&mut self, new_value: T)
    where T: Clone, {
        self.previous = Some(self.current.clone());
        self.current = new_value;
    }

    pub fn is_same_as_previous(&self) -> bool
    where T: PartialEq {
        match &self.previous {
            Some(previous) => previous == &self.current,
            None => false,
        }
    }
}

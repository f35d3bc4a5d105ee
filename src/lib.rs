pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod namedobject;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
    }

    pub mod polynomial {
        pub mod polynomialerror;
        pub mod polynomial;
        pub mod display;

        #[cfg(test)]
        mod proptests;
    }
}
